//! Integration tests for render determinism
//!
//! With many tags in flight, resolution may complete in any order; the
//! rendered text and metadata must not depend on it.

use broadsheet_engine::{Engine, RenderOptions};
use broadsheet_foundation::Scalar;
use broadsheet_tags::{DataTableHeader, RenderContext, TableSource};

/// A context whose every cell names its own coordinates, so a misplaced
/// result is visible in the output.
fn coordinate_ctx(rows: usize) -> RenderContext {
    let headers = vec![DataTableHeader::new("cell")];
    let rows = (1..=rows)
        .map(|r| vec![Scalar::from(format!("cell-{r}"))])
        .collect();
    RenderContext::new().with_source("main", TableSource::new(headers, rows))
}

/// One value tag per row, in row order.
fn coordinate_template(rows: usize) -> String {
    (1..=rows)
        .map(|r| format!("{{{{value source=\"main\" row=\"{r}\"}}}}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn output_is_identical_across_concurrency_caps() {
    let ctx = coordinate_ctx(40);
    let template = coordinate_template(40);

    // Cap 1 resolves strictly in order; it is the reference output.
    let sequential = Engine::with_options(&RenderOptions::new().with_concurrency(1))
        .unwrap()
        .execute(&template, &ctx)
        .unwrap();

    for cap in [2, 3, 8] {
        let concurrent = Engine::with_options(&RenderOptions::new().with_concurrency(cap))
            .unwrap()
            .execute(&template, &ctx)
            .unwrap();
        assert_eq!(concurrent.rendered, sequential.rendered, "cap {cap}");
        assert_eq!(concurrent.tags, sequential.tags, "cap {cap}");
    }
}

#[test]
fn repeated_renders_are_stable() {
    let ctx = coordinate_ctx(24);
    let template = coordinate_template(24);
    let engine = Engine::new().unwrap();

    let first = engine.execute(&template, &ctx).unwrap();
    for _ in 0..10 {
        let again = engine.execute(&template, &ctx).unwrap();
        assert_eq!(again, first);
    }
}

#[test]
fn every_result_lands_at_its_own_position() {
    let rows = 30;
    let ctx = coordinate_ctx(rows);
    let template = coordinate_template(rows);
    let output = Engine::new().unwrap().execute(&template, &ctx).unwrap();

    let lines: Vec<&str> = output.rendered.lines().collect();
    assert_eq!(lines.len(), rows);
    for (i, line) in lines.iter().enumerate() {
        assert_eq!(*line, format!("cell-{}", i + 1));
    }
    assert_eq!(output.tags.len(), rows);
}
