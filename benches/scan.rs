use std::io::{BufWriter, Write};

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, Criterion};
use most_active_cookie::{most_active_cookies, ScanMode};

const DAYS: i64 = 365;
const RECORDS_PER_DAY: i64 = 200;

// newest first, one year of records ending on 2018-12-31
fn sorted_log() -> tempfile::NamedTempFile {
    let file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    let mut writer = BufWriter::new(file.as_file());
    writeln!(writer, "cookie,timestamp").unwrap();

    let end = Utc.with_ymd_and_hms(2018, 12, 31, 23, 59, 0).unwrap();
    let step = Duration::minutes(24 * 60 / RECORDS_PER_DAY);
    for i in 0..DAYS * RECORDS_PER_DAY {
        let ts = end - step * i as i32;
        writeln!(writer, "cookie{:04},{}", i % 97, ts.to_rfc3339()).unwrap();
    }
    writer.flush().unwrap();
    drop(writer);
    file
}

fn scan_benchmark(c: &mut Criterion) {
    let log = sorted_log();
    let date = NaiveDate::from_ymd_opt(2018, 12, 30).unwrap();

    c.bench_function("early_exit", |b| {
        b.iter(|| most_active_cookies(log.path(), date, ScanMode::EarlyExit).unwrap())
    });
    c.bench_function("full_scan", |b| {
        b.iter(|| most_active_cookies(log.path(), date, ScanMode::Full).unwrap())
    });
}

criterion_group!(benches, scan_benchmark);
criterion_main!(benches);
