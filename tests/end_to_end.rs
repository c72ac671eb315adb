//! End-to-end tests: workspace discovery, position resolution, definition
//! resolution, and reference aggregation against a mock index server.

use std::fs;
use std::path::PathBuf;

use glance::base::Position;
use glance::client::ServerConfig;
use glance::ide::Analysis;

/// Module table for `Main.hs`: one occurrence at (10, 5, 8) bound to an
/// external identifier whose definition is only approximately located.
const MAIN_MODULE_JSON: &str = r#"{
    "identifiers": {
        "x1": {
            "sort": "External",
            "occName": "foo",
            "locationInfo": {
                "tag": "ApproximateLocation",
                "packageId": {"name": "pkg", "version": "1.0"},
                "moduleName": "M",
                "entity": "Val",
                "name": "foo",
                "componentId": "c1"
            },
            "idType": {
                "components": [{"tag": "Text", "contents": "Int -> Int"}]
            },
            "externalId": "pkg-1.0|M|Val|foo"
        }
    },
    "occurrences": {
        "10-5-8": {"internalId": "x1", "isBinder": false, "sort": {"tag": "ValueId"}},
        "11-5-8": {"internalId": "x1", "isBinder": true, "sort": {"tag": "ValueId"}}
    }
}"#;

const DEFINITION_SITE_JSON: &str = r#"{
    "location": {
        "tag": "ExactLocation",
        "packageId": {"name": "pkg", "version": "1.0"},
        "modulePath": "M.hs",
        "moduleName": "M",
        "startLine": 3,
        "endLine": 3,
        "startColumn": 1,
        "endColumn": 4
    },
    "documentation": "Adds one."
}"#;

/// Document text whose line 10 (1-based) has "foo" in columns 5-8, plus a
/// binder occurrence of the same identifier on line 11.
fn document_text() -> String {
    let mut text = String::new();
    for _ in 0..9 {
        text.push('\n');
    }
    text.push_str("x = foo 1\n");
    text.push_str("    foo y = y + 1\n");
    text
}

struct Fixture {
    _workspace: tempfile::TempDir,
    pkg_dir: PathBuf,
    file: PathBuf,
    analysis: Analysis,
    server: mockito::ServerGuard,
}

async fn fixture() -> Fixture {
    let workspace = tempfile::tempdir().unwrap();
    let pkg_dir = workspace.path().join("pkg");
    fs::create_dir_all(&pkg_dir).unwrap();
    fs::write(pkg_dir.join("pkg.cabal"), "name: pkg\nversion: 1.0\n").unwrap();
    let file = pkg_dir.join("Main.hs");

    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/files/pkg-1.0/.haskell-code-explorer/Main.hs.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(MAIN_MODULE_JSON)
        .create_async()
        .await;

    let analysis = Analysis::new(&ServerConfig::new(server.url()));
    analysis.set_workspace_folders(&[workspace.path().to_path_buf()]);

    Fixture {
        _workspace: workspace,
        pkg_dir,
        file,
        analysis,
        server,
    }
}

#[tokio::test]
async fn goto_definition_resolves_approximate_location_with_one_lookup() {
    let mut fx = fixture().await;
    let definition_mock = fx
        .server
        .mock("GET", "/api/definitionSite/pkg-1.0/c1/M/Val/foo")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(DEFINITION_SITE_JSON)
        .expect(1)
        .create_async()
        .await;

    let text = document_text();
    // Cursor inside "foo" on 0-based line 9 → occurrence (10, 5, 8).
    let result = fx
        .analysis
        .goto_definition(&fx.file, &text, Position::new(9, 5))
        .await;

    assert_eq!(result.targets.len(), 1);
    let target = &result.targets[0];
    assert_eq!(target.name, "foo");
    assert_eq!(target.location.file, fx.pkg_dir.join("M.hs"));
    // Index line 3 is host line 2 (0-based).
    assert_eq!(target.location.span.start.line, 2);
    assert_eq!(target.location.span.start.column, 0);

    // Warm caches: the same jump re-resolves without another lookup.
    let again = fx
        .analysis
        .goto_definition(&fx.file, &text, Position::new(9, 5))
        .await;
    assert_eq!(again.targets.len(), 1);
    definition_mock.assert_async().await;
}

#[tokio::test]
async fn goto_definition_skips_binder_occurrence() {
    let fx = fixture().await;
    let text = document_text();

    // Line 11 holds the binder occurrence of the same identifier.
    let result = fx
        .analysis
        .goto_definition(&fx.file, &text, Position::new(10, 5))
        .await;
    assert!(result.is_empty());
}

#[tokio::test]
async fn hover_shows_type_signature() {
    let fx = fixture().await;
    let text = document_text();

    let hover = fx
        .analysis
        .hover(&fx.file, &text, Position::new(9, 5))
        .await
        .unwrap();
    assert!(hover.contents.contains("foo :: Int -> Int"));
    assert_eq!(hover.span.start.line, 9);
    assert_eq!(hover.span.start.column, 4);
    assert_eq!(hover.span.end.column, 7);
}

#[tokio::test]
async fn hover_includes_documentation_once_definition_cache_is_warm() {
    let mut fx = fixture().await;
    let definition_mock = fx
        .server
        .mock("GET", "/api/definitionSite/pkg-1.0/c1/M/Val/foo")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(DEFINITION_SITE_JSON)
        .expect(1)
        .create_async()
        .await;

    let text = document_text();

    // Cold cache: hover has the signature but no documentation, and issues
    // no definition-site request of its own.
    let cold = fx
        .analysis
        .hover(&fx.file, &text, Position::new(9, 5))
        .await
        .unwrap();
    assert!(!cold.contents.contains("Adds one."));

    // A jump warms the definition-site cache.
    let jump = fx
        .analysis
        .goto_definition(&fx.file, &text, Position::new(9, 5))
        .await;
    assert_eq!(jump.targets.len(), 1);

    // Warm cache: the same hover now carries the site's documentation,
    // still with exactly one definition-site request total.
    let warm = fx
        .analysis
        .hover(&fx.file, &text, Position::new(9, 5))
        .await
        .unwrap();
    assert!(warm.contents.contains("foo :: Int -> Int"));
    assert!(warm.contents.contains("Adds one."));
    definition_mock.assert_async().await;
}

#[tokio::test]
async fn find_references_fans_out_and_translates_known_packages() {
    let mut fx = fixture().await;
    // Discovery reports two packages; only "pkg" exists in the workspace.
    fx.server
        .mock("GET", "/api/globalReferences/pkg-1.0%7CM%7CVal%7Cfoo")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[
                {"count": 1, "packageId": "pkg-1.0"},
                {"count": 1, "packageId": "ghost-9.9"}
            ]"#,
        )
        .create_async()
        .await;
    fx.server
        .mock(
            "GET",
            "/api/references/pkg-1.0/pkg-1.0%7CM%7CVal%7Cfoo?per_page=10000",
        )
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[{
                "name": "Main.hs",
                "references": [{
                    "sourceCodeHtml": "<span>x = foo 1</span>",
                    "idSrcSpan": {"modulePath": "Main.hs", "line": 10, "startColumn": 5, "endColumn": 8}
                }]
            }]"#,
        )
        .create_async()
        .await;
    fx.server
        .mock(
            "GET",
            "/api/references/ghost-9.9/pkg-1.0%7CM%7CVal%7Cfoo?per_page=10000",
        )
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[{
                "name": "G.hs",
                "references": [{
                    "sourceCodeHtml": "<span>foo</span>",
                    "idSrcSpan": {"modulePath": "G.hs", "line": 1, "startColumn": 1, "endColumn": 4}
                }]
            }]"#,
        )
        .create_async()
        .await;

    let text = document_text();
    let result = fx
        .analysis
        .find_references(&fx.file, &text, Position::new(9, 5))
        .await;

    // The ghost package's reference has no local folder and is dropped at
    // translation; pkg's survives with 0-based coordinates.
    assert_eq!(result.len(), 1);
    let reference = &result.references[0];
    assert_eq!(reference.location.file, fx.pkg_dir.join("Main.hs"));
    assert_eq!(reference.location.span.start.line, 9);
    assert_eq!(reference.location.span.start.column, 4);
    assert!(reference.source_code_html.contains("foo"));
}

#[tokio::test]
async fn queries_survive_an_unreachable_server() {
    let workspace = tempfile::tempdir().unwrap();
    let pkg_dir = workspace.path().join("pkg");
    fs::create_dir_all(&pkg_dir).unwrap();
    fs::write(pkg_dir.join("pkg.cabal"), "name: pkg\nversion: 1.0\n").unwrap();

    // Nothing listens on port 1.
    let analysis = Analysis::new(&ServerConfig::new("http://localhost:1"));
    analysis.set_workspace_folders(&[workspace.path().to_path_buf()]);
    let file = pkg_dir.join("Main.hs");

    let hover = analysis.hover(&file, "foo = 1", Position::new(0, 0)).await;
    assert!(hover.is_none());
    let goto = analysis
        .goto_definition(&file, "foo = 1", Position::new(0, 0))
        .await;
    assert!(goto.is_empty());
}
