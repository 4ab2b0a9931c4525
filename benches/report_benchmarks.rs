//! Performance benchmarks for the schedule engine.
//!
//! Covers the parser alone, the full parse + report pipeline at several
//! schedule sizes, and one request through the HTTP router.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::{Datelike, Duration, NaiveDate};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use schedule_engine::api::{AppState, create_router};
use schedule_engine::calculation::{PolicySet, weekday_name};
use schedule_engine::config::EngineConfig;
use schedule_engine::models::Settings;
use schedule_engine::parser::parse_schedule;
use schedule_engine::pipeline::process_schedule;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

const EMPLOYEES: [&str; 6] = [
    "Казидуб",
    "Кіселиця",
    "Беньковська",
    "Пую",
    "Шевчук",
    "Мельник",
];

/// Builds a schedule of `weeks` full weeks starting Monday 2025-09-01,
/// with every employee working every day.
fn generate_schedule(weeks: u32) -> String {
    let start = NaiveDate::from_ymd_opt(2025, 9, 1).expect("valid date");
    let mut text = String::new();
    for offset in 0..(weeks * 7) {
        let date = start + Duration::days(i64::from(offset));
        text.push_str(&format!(
            "{} {}\n",
            weekday_name(date.weekday()),
            date.format("%d.%m")
        ));
        for (index, employee) in EMPLOYEES.iter().enumerate() {
            let begin = 7 + index % 4;
            text.push_str(&format!(
                "{} {}:00-{}:30 (13:00-13:30)\n",
                employee,
                begin,
                begin + 10
            ));
        }
        text.push('\n');
    }
    text
}

fn settings() -> Settings {
    Settings {
        year: 2025,
        week_count: 6,
        anchor: None,
    }
}

/// Benchmark: Parsing only, four weeks of text.
fn bench_parse(c: &mut Criterion) {
    let text = generate_schedule(4);
    let policies = PolicySet::default();

    c.bench_function("parse_4_weeks", |b| {
        b.iter(|| black_box(parse_schedule(black_box(&text), 2025, &policies).unwrap()))
    });
}

/// Benchmark: Full pipeline at increasing schedule sizes.
fn bench_pipeline_scaling(c: &mut Criterion) {
    let policies = PolicySet::default();
    let settings = settings();

    let mut group = c.benchmark_group("pipeline");
    for weeks in [1u32, 2, 4, 6].iter() {
        let text = generate_schedule(*weeks);
        group.throughput(Throughput::Elements(u64::from(*weeks) * 7 * EMPLOYEES.len() as u64));
        group.bench_with_input(BenchmarkId::new("weeks", weeks), weeks, |b, _| {
            b.iter(|| black_box(process_schedule(&text, &settings, &policies).unwrap()))
        });
    }
    group.finish();
}

/// Benchmark: One report request through the router.
fn bench_http_reports(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let mut config = EngineConfig::default();
    config.defaults.year = Some(2025);
    let router = create_router(AppState::new(config));
    let body = serde_json::json!({ "text": generate_schedule(4) }).to_string();

    c.bench_function("http_reports_4_weeks", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/conversations/bench/reports")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(benches, bench_parse, bench_pipeline_scaling, bench_http_reports);
criterion_main!(benches);
