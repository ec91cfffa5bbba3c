//! Performance benchmarks for the payroll engine.
//!
//! Covers one pay statement computed directly, one statement through the
//! HTTP router, and monthly runs over 100 and 1000 employees.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::collections::HashMap;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::calculation::{generate_pay_statement, run_monthly_payroll};
use payroll_engine::models::{Employee, EmployeeType};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Builds a roster cycling through the three employee types.
fn create_roster(size: u32) -> (Vec<Employee>, HashMap<u32, Decimal>) {
    let mut units = HashMap::new();
    let employees = (0..size)
        .map(|i| {
            let id = 1000 + i;
            let (employee_type, base_rate) = match i % 3 {
                0 => (EmployeeType::FullTime, Decimal::new(3000 + i as i64 * 10, 0)),
                1 => {
                    units.insert(id, Decimal::from(60 + i % 70));
                    (EmployeeType::PartTime, Decimal::new(2850, 2))
                }
                _ => {
                    units.insert(id, Decimal::from(10 + i % 12));
                    (EmployeeType::Contractor, Decimal::new(250, 0))
                }
            };
            let employee = Employee::new(id, format!("Employee {}", i), employee_type, base_rate);
            employee.with_retirement(i % 2 == 0).with_union(i % 5 == 0)
        })
        .collect();
    (employees, units)
}

/// Benchmark: One statement, computed directly.
fn bench_single_statement(c: &mut Criterion) {
    let employee = Employee::new(
        103,
        "Carol Williams",
        EmployeeType::FullTime,
        Decimal::new(6000, 0),
    )
    .with_retirement(true)
    .with_union(true);

    c.bench_function("single_statement", |b| {
        b.iter(|| generate_pay_statement(black_box(&employee), black_box(Decimal::ZERO)))
    });
}

/// Benchmark: One statement through the HTTP router.
fn bench_statement_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::without_roster());
    let body = serde_json::json!({
        "employee": {
            "id": 104,
            "name": "David Brown",
            "employee_type": "part_time",
            "base_rate": "28.50",
            "retirement_opt_in": true
        },
        "units_worked": "100"
    })
    .to_string();

    c.bench_function("statement_endpoint", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/pay-statements")
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

/// Benchmark: Monthly runs at increasing roster sizes.
fn bench_monthly_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("monthly_run");
    group.sample_size(20);

    for size in [100u32, 1000].iter() {
        let (employees, units) = create_roster(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("employees", size), size, |b, _| {
            b.iter(|| run_monthly_payroll(black_box(&employees), black_box(&units)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_statement,
    bench_statement_endpoint,
    bench_monthly_run,
);
criterion_main!(benches);
