use criterion::{black_box, criterion_group, criterion_main, Criterion};

use phone_number_helper::{telephony, DefaultResources, PhoneNumberHelper};

// (number, region the number is dialed from)
type TestEntity = (&'static str, &'static str);

fn setup_data() -> Vec<TestEntity> {
    vec![
        ("(650) 253-0000", "US"),
        ("+44 20 7031 3000", "GB"),
        ("089 12345678", "DE"),
        ("+41 44 668 1800", "CH"),
        ("*31#+16502530000,1234", "US"),
        ("alice@example.com", "US"),
        ("-2", "US"),
    ]
}

fn helper_benchmark(c: &mut Criterion) {
    let numbers = setup_data();
    let helper = PhoneNumberHelper::new(DefaultResources::default(), Some("+15551234567"));

    let mut group = c.benchmark_group("Helper");

    group.bench_function("extract_network_portion", |b| {
        b.iter(|| {
            for (number, _) in &numbers {
                let _ = telephony::extract_network_portion(black_box(number));
            }
        })
    });

    group.bench_function("display_number", |b| {
        b.iter(|| {
            for (number, _) in &numbers {
                let _ = helper.display_number(black_box(number), None);
            }
        })
    });

    group.bench_function("call_uri", |b| {
        b.iter(|| {
            for (number, _) in &numbers {
                let _ = helper.call_uri(black_box(number)).to_string();
            }
        })
    });

    // the first pass fills the geocoder cache, later passes measure lookups
    group.bench_function("geocode_for_raw_number", |b| {
        b.iter(|| {
            for (number, region) in &numbers {
                let _ = helper.geocode_for_raw_number(black_box(number), black_box(region));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, helper_benchmark);
criterion_main!(benches);
