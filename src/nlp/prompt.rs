use chrono::NaiveDate;

/// Builds the extraction prompt for `message`, anchored on `today`.
pub fn build_prompt(message: &str, today: NaiveDate) -> String {
    let today = today.format("%Y-%m-%d");
    format!(
        "Extract the following information from the user's message and return it as a JSON \
         array of objects. Each object in the array represents one daily entry. If a value \
         (target_hours, actual_hours) is not explicitly mentioned for a day, set it to null. \
         If the user expresses an intent to clear or set to zero the target or actual hours, \
         set the respective field to 0. The date must be in 'YYYY-MM-DD' format. If no date is \
         specified for a single entry, default to today's date. Today's date is {today}. If the \
         message implies deleting an entry or the hours for a day, set 'operation' to 'delete'; \
         otherwise set it to 'upsert'.\n\n\
         User message: \"{message}\"\n\n\
         JSON format: [\n  \
         {{\"entry_date\": \"YYYY-MM-DD\", \"target_hours\": number | null, \
         \"actual_hours\": number | null, \"operation\": \"upsert\" | \"delete\"}}\n\
         ]"
    )
}
