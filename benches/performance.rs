use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hours_core::{
    core::services::SummaryService,
    domain::{DailyEntry, Session},
    storage::{EntryStore, JsonStorage},
};
use tempfile::tempdir;
use uuid::Uuid;

fn build_sample_entries(user_id: Uuid, days: usize) -> Vec<DailyEntry> {
    let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    (0..days)
        .map(|idx| {
            let target = if idx % 7 < 5 { 8.0 } else { 0.0 };
            let actual = target - (idx % 5) as f64 * 0.5;
            DailyEntry::new(user_id, start + Duration::days(idx as i64), target, actual.max(0.0))
        })
        .collect()
}

fn bench_rollups(c: &mut Criterion) {
    let entries = build_sample_entries(Uuid::nil(), 3 * 365);
    let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();

    c.bench_function("summary_three_years", |b| {
        b.iter(|| {
            let summary = SummaryService::summarize(black_box(&entries), None, today, today);
            black_box(summary);
        })
    });

    c.bench_function("trend_thirteen_months", |b| {
        b.iter(|| {
            let trend = SummaryService::trend(black_box(&entries), today);
            black_box(trend);
        })
    });
}

fn bench_store_io(c: &mut Criterion) {
    let dir = tempdir().expect("tempdir");
    let storage = JsonStorage::new(Some(dir.path().to_path_buf())).expect("storage");
    let session = Session::new(Uuid::new_v4());
    for entry in build_sample_entries(session.user_id, 365) {
        storage.insert_entry(&session, entry).expect("seed entry");
    }

    c.bench_function("store_fetch_365", |b| {
        b.iter(|| {
            let entries = storage.fetch_entries(&session).expect("fetch");
            black_box(entries);
        })
    });
}

criterion_group!(benches, bench_rollups, bench_store_io);
criterion_main!(benches);
