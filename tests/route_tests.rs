//! Route parsing tests
//!
//! Strategy selection, count defaults, rejection of malformed segments and
//! the navigation presets.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use tablebench::{BenchError, RenderStrategy, Route};
use test_case::test_case;

// =============================================================================
// PARSING
// =============================================================================

#[test_case("/sortable/1000/20", RenderStrategy::Sortable, 1000, 20 ; "sortable explicit")]
#[test_case("/static/500", RenderStrategy::Static, 500, 10 ; "column count defaults")]
#[test_case("/virtualized", RenderStrategy::Virtualized, 100, 10 ; "both counts default")]
#[test_case("/virtualized/10000/5/", RenderStrategy::Virtualized, 10000, 5 ; "trailing slash")]
#[test_case("virtualized/0/0", RenderStrategy::Virtualized, 0, 0 ; "no leading slash and zeros")]
#[test_case("/static/7/3?debug=1#top", RenderStrategy::Static, 7, 3 ; "query and fragment ignored")]
fn test_parse_route(path: &str, strategy: RenderStrategy, rows: usize, cols: usize) {
    let route = Route::parse(path).unwrap();
    assert_eq!(route, Route::new(strategy, rows, cols));
}

#[test]
fn test_monolith_route() {
    let route: Route = "/monolith".parse().unwrap();
    assert_eq!(route.strategy, RenderStrategy::Sortable);
    assert_eq!((route.row_count, route.column_count), (10, 10));
    assert!(route.monolith);
}

#[test]
fn test_monolith_keeps_its_path() {
    let route = Route::parse("/monolith/").unwrap();
    assert_eq!(route.to_path(), "/monolith");
    assert_eq!(route.to_string(), "/monolith");
    assert_eq!(Route::parse(&route.to_path()).unwrap(), route);
    assert_ne!(route, Route::new(RenderStrategy::Sortable, 10, 10));
    let json = serde_json::to_value(route).unwrap();
    assert_eq!(json["monolith"], true);
}

// =============================================================================
// REJECTION
// =============================================================================

#[test_case("/sortable/-5" ; "negative rows")]
#[test_case("/sortable/abc" ; "non numeric rows")]
#[test_case("/static/10/2.5" ; "fractional columns")]
#[test_case("/static/10/+3" ; "signed columns")]
fn test_bad_counts_are_invalid_config(path: &str) {
    assert!(matches!(
        Route::parse(path),
        Err(BenchError::InvalidConfig(_))
    ));
}

#[test_case("" ; "empty")]
#[test_case("/" ; "root")]
#[test_case("/grid/10" ; "unknown strategy")]
#[test_case("/static/10/10/10" ; "extra segment")]
#[test_case("/monolith/10" ; "monolith takes no counts")]
fn test_bad_paths_are_route_errors(path: &str) {
    assert!(matches!(Route::parse(path), Err(BenchError::Route(_))));
}

#[test]
fn test_oversized_counts_fail_config() {
    let route = Route::parse("/static/100001").unwrap();
    assert!(matches!(route.config(), Err(BenchError::InvalidConfig(_))));
    assert!(Route::parse("/static/100000/1000").unwrap().config().is_ok());
}

// =============================================================================
// FORMATTING
// =============================================================================

#[test]
fn test_path_is_canonical() {
    let route = Route::parse("/static/42").unwrap();
    assert_eq!(route.to_path(), "/static/42/10");
    assert_eq!(route.to_string(), "/static/42/10");
    assert_eq!(Route::parse(&route.to_path()).unwrap(), route);
}

#[test]
fn test_nav_links_cover_every_strategy_and_preset() {
    let links = Route::nav_links();
    let labels: Vec<&str> = links.iter().map(|(label, _)| label.as_str()).collect();
    assert_eq!(
        labels,
        [
            "Sortable (100)",
            "Sortable (1,000)",
            "Sortable (10,000)",
            "Static (100)",
            "Static (1,000)",
            "Static (10,000)",
            "Virtualized (100)",
            "Virtualized (1,000)",
            "Virtualized (10,000)",
            "Monolith Table",
        ]
    );
    for (_, route) in &links {
        assert!(route.config().is_ok(), "{route} should be a valid configuration");
    }
}

#[test]
fn test_route_serializes_camel_case() {
    let json = serde_json::to_value(Route::new(RenderStrategy::Virtualized, 5, 2)).unwrap();
    assert_eq!(json["strategy"], "virtualized");
    assert_eq!(json["rowCount"], 5);
    assert_eq!(json["columnCount"], 2);
    assert_eq!(json["monolith"], false);
}
