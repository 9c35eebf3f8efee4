use callscope::core::{load_analysis, parse_analysis, LookupTables};
use callscope::formatters::{ConsoleFormatter, CypherFormatter};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::{json, Value};

/// Synthetic analysis result with `services` services of ten classes each.
fn synthetic_document(services: usize) -> Value {
    let mut service_records = Vec::new();
    let mut classes = Vec::new();
    let mut methods = Vec::new();
    let mut calls = Vec::new();
    let mut chains = Vec::new();

    for s in 0..services {
        service_records.push(json!({
            "id": format!("svc-{s:04}-0000"),
            "name": format!("service-{s}"),
            "artifactId": format!("service-{s}-api")
        }));

        for c in 0..10 {
            let class_id = format!("cls-{s:04}-{c:04}");
            classes.push(json!({
                "id": class_id,
                "className": format!("Component{c}"),
                "qualifiedName": format!("com.example.s{s}.Component{c}"),
                "type": "SERVICE"
            }));

            let mut chain = Vec::new();
            for m in 0..5 {
                let method_id = format!("mth-{s:04}-{c:04}-{m:02}");
                methods.push(json!({
                    "id": method_id,
                    "methodName": format!("step{m}"),
                    "signature": format!("step{m}(Request)")
                }));
                if m > 0 {
                    calls.push(json!({
                        "sourceMethodId": format!("mth-{s:04}-{c:04}-{:02}", m - 1),
                        "targetMethodId": method_id,
                        "callType": "INTERNAL_METHOD_CALL",
                        "crossService": false
                    }));
                }
                chain.push(json!({
                    "level": m,
                    "methodId": method_id,
                    "classId": class_id,
                    "callType": "INTERNAL_METHOD_CALL"
                }));
            }

            chains.push(json!({
                "id": format!("chain-{s}-{c}"),
                "entryPoint": {
                    "methodId": format!("mth-{s:04}-{c:04}-00"),
                    "classId": class_id,
                    "serviceId": format!("svc-{s:04}-0000"),
                    "httpEndpoint": format!("GET /s{s}/c{c}")
                },
                "chain": chain,
                "maxDepth": 4,
                "involvedServices": [format!("svc-{s:04}-0000")],
                "crossService": false
            }));
        }
    }

    json!({
        "services": service_records,
        "classes": classes,
        "methods": methods,
        "methodCalls": calls,
        "callChains": chains
    })
}

fn benchmark_loading(c: &mut Criterion) {
    let mut group = c.benchmark_group("loading");

    let content = synthetic_document(20).to_string();
    group.bench_function("parse_and_index", |b| {
        b.iter(|| {
            let document = parse_analysis(black_box(&content)).unwrap();
            let tables = LookupTables::build(&document);
            black_box(tables.method_count())
        });
    });

    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("analysis-output.json");
    std::fs::write(&path, &content).unwrap();
    group.bench_function("load_from_disk", |b| {
        b.iter(|| black_box(load_analysis(black_box(&path)).unwrap()));
    });

    group.finish();
}

fn benchmark_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");

    let document = parse_analysis(&synthetic_document(20).to_string()).unwrap();
    let tables = LookupTables::build(&document);

    group.bench_function("console_report", |b| {
        let formatter = ConsoleFormatter::new();
        b.iter(|| black_box(formatter.format_report(black_box(&document), &tables)));
    });

    group.bench_function("cypher_script", |b| {
        let formatter = CypherFormatter::new();
        b.iter(|| black_box(formatter.format_document(black_box(&document))));
    });

    group.finish();
}

criterion_group!(benches, benchmark_loading, benchmark_rendering);
criterion_main!(benches);
