/// Integration tests for the outline and definition analyzers
///
/// Tests verify:
/// - Span resolution of multi-line definitions
/// - Block headers take priority over assignments on the same line
/// - Graceful truncation on unbalanced brackets, cancellation and the line ceiling
/// - First textual definition wins for go-to-definition

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use indoc::indoc;
use quickcheck::{QuickCheck, TestResult};

use fcs_language_server::analysis::{
    BlockVariant, SymbolKind, SymbolTableBuilder, build_symbol_table, end_of_definition,
    locate_definition,
};
use fcs_language_server::cancellation::{CancellationToken, NeverCancelled};
use fcs_language_server::config::AnalysisConfig;
use fcs_language_server::text::{Position, SourceLines, Span};

fn names(source: &str) -> Vec<String> {
    build_symbol_table(&SourceLines::new(source), &NeverCancelled)
        .into_iter()
        .map(|symbol| symbol.name)
        .collect()
}

#[test]
fn test_report_outline() {
    let source = indoc! {r#"
        # Cross-section checks
        gblock {SectionCheck}
          utilisation := 0.8
        gclass {Beam}
        span := 6.5
        loads := [
          1.2,
          {g: 3.4}
        ]
        check := (m, v) => {
          m / v
        }
        report := Fcs.Reporting.Document{ title := "Beam" }
    "#};

    let table = build_symbol_table(&SourceLines::new(source), &NeverCancelled);
    let summary: Vec<_> = table
        .iter()
        .map(|symbol| (symbol.name.as_str(), symbol.kind, symbol.definition_range.end.line))
        .collect();

    assert_eq!(
        summary,
        vec![
            ("SectionCheck", SymbolKind::NamedBlock { variant: BlockVariant::Block }, 1),
            ("Beam", SymbolKind::NamedBlock { variant: BlockVariant::Class }, 3),
            ("span", SymbolKind::Variable, 4),
            ("loads", SymbolKind::Variable, 8),
            ("check", SymbolKind::Function, 11),
            ("report", SymbolKind::Variable, 12),
        ]
    );

    let check = &table[4];
    assert_eq!(check.name_range, Span::on_line(9, 0, 5));
    assert_eq!(check.definition_range, Span::new(Position::new(9, 0), Position::new(11, 1)));
}

#[test]
fn test_multi_line_call_is_a_variable() {
    let table = build_symbol_table(&SourceLines::new("foo := bar(\n  1,\n  2\n)\n"), &NeverCancelled);
    assert_eq!(table.len(), 1);
    assert_eq!(table[0].name, "foo");
    assert_eq!(table[0].kind, SymbolKind::Variable);
    assert_eq!(table[0].definition_range.end, Position::new(3, 1));
}

#[test]
fn test_block_header_with_indented_body() {
    let table = build_symbol_table(&SourceLines::new("gblock {Frame}\n  x := 1\n"), &NeverCancelled);
    assert_eq!(table.len(), 1);
    assert_eq!(table[0].name, "Frame");
    assert_eq!(table[0].kind, SymbolKind::NamedBlock { variant: BlockVariant::Block });
    assert_eq!(table[0].definition_range, Span::new(Position::new(0, 0), Position::new(0, 14)));
}

#[test]
fn test_block_header_without_name_is_ignored() {
    assert_eq!(names("gblock Frame\ngclass {}\nafter := 1"), vec!["after"]);
}

#[test]
fn test_function_body_spans_to_closing_brace() {
    let source = indoc! {r#"
        area := (b, h) => {
          half := b / 2
          half * h
        }
        next := 1
    "#};
    let table = build_symbol_table(&SourceLines::new(source), &NeverCancelled);
    assert_eq!(names(source), vec!["area", "next"]);
    assert_eq!(table[0].kind, SymbolKind::Function);
    assert_eq!(table[0].definition_range.end, Position::new(3, 1));
}

#[test]
fn test_unterminated_bracket_truncates_to_header() {
    let source = "values := [1, 2,\n  3\nnext := 4\n";
    assert_eq!(end_of_definition(&SourceLines::new(source), 0, 10_000), Position::new(0, 16));
    assert_eq!(names(source), vec!["values", "next"]);
}

#[test]
fn test_line_ceiling_bounds_the_scan() {
    let source: String = (0..20).map(|i| format!("v{i} := {i}\n")).collect();
    let builder = SymbolTableBuilder::new(AnalysisConfig { max_lines: 5 });
    let table = builder.build(&SourceLines::new(&source), &NeverCancelled);
    assert_eq!(table.len(), 5);
    assert_eq!(table[4].name, "v4");
}

#[test]
fn test_cancelled_before_first_line_is_empty() {
    let cancel = AtomicBool::new(true);
    let table = build_symbol_table(&SourceLines::new("a := 1\nb := 2\n"), &cancel);
    assert!(table.is_empty());
}

/// Host flag that flips after a fixed number of scanned lines.
struct FlipAfter {
    lines: usize,
    scanned: AtomicUsize,
}

impl CancellationToken for FlipAfter {
    fn is_cancelled(&self) -> bool {
        self.scanned.fetch_add(1, Ordering::SeqCst) >= self.lines
    }
}

#[test]
fn test_scan_cancelled_midway_returns_prefix() {
    let source = indoc! {r#"
        a := 1
        b := (x) => {
          x * 2
        }
        c := 3
        d := 4
    "#};
    let cancel = FlipAfter { lines: 2, scanned: AtomicUsize::new(0) };
    let table = build_symbol_table(&SourceLines::new(source), &cancel);
    let names: Vec<_> = table.iter().map(|symbol| symbol.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b"]);
    assert_eq!(table[1].definition_range.end, Position::new(3, 1));
}

#[test]
fn test_first_definition_wins() {
    let source = indoc! {r#"
        total := 1
        total := 2
        result := total + 1
    "#};
    let text = SourceLines::new(source);
    let link = locate_definition(&SymbolTableBuilder::default(), &text, Position::new(2, 12), &NeverCancelled)
        .expect("definition of total");

    assert_eq!(link.origin, Span::on_line(2, 10, 15));
    assert_eq!(link.target.name, "total");
    assert_eq!(link.target_selection_range(), Span::on_line(0, 0, 5));
    assert_eq!(link.target_range(), Span::new(Position::new(0, 0), Position::new(0, 10)));
}

#[test]
fn test_definition_of_block_name() {
    let source = "gclass {Beam}\nb := Beam{}\n";
    let text = SourceLines::new(source);
    let link = locate_definition(&SymbolTableBuilder::default(), &text, Position::new(1, 6), &NeverCancelled)
        .expect("definition of Beam");
    assert_eq!(link.target_selection_range(), Span::on_line(0, 8, 12));
}

#[test]
fn test_no_definition_for_whitespace_or_unknown_word() {
    let text = SourceLines::new("a := b  \n");
    let builder = SymbolTableBuilder::default();
    assert!(locate_definition(&builder, &text, Position::new(0, 5), &NeverCancelled).is_none());
    assert!(locate_definition(&builder, &text, Position::new(0, 8), &NeverCancelled).is_none());
}

fn identifier(seed: &str) -> Option<String> {
    let name: String = seed.chars().filter(|c| c.is_ascii_alphanumeric() || *c == '_').collect();
    let is_keyword = name == "gblock" || name == "gclass";
    (name.starts_with(|c: char| c.is_ascii_alphabetic()) && !is_keyword).then_some(name)
}

#[test]
fn test_single_line_variable_spans_its_line() {
    fn prop(seed: String, value: u32) -> TestResult {
        let Some(name) = identifier(&seed) else {
            return TestResult::discard();
        };
        let line = format!("{name} := {value}");
        let table = build_symbol_table(&SourceLines::new(&line), &NeverCancelled);
        if table.len() != 1 {
            return TestResult::failed();
        }
        let length = line.chars().count();
        TestResult::from_bool(
            table[0].definition_range == Span::new(Position::new(0, 0), Position::new(0, length))
                && table[0].name_range == Span::on_line(0, 0, name.chars().count()),
        )
    }

    QuickCheck::new()
        .tests(200)
        .quickcheck(prop as fn(String, u32) -> TestResult);
}

#[test]
fn test_symbol_table_is_idempotent() {
    fn prop(lines: Vec<String>) -> bool {
        let source = lines.join("\n");
        let text = SourceLines::new(&source);
        build_symbol_table(&text, &NeverCancelled) == build_symbol_table(&text, &NeverCancelled)
    }

    QuickCheck::new()
        .tests(200)
        .quickcheck(prop as fn(Vec<String>) -> bool);
}

#[test]
fn test_unbalanced_open_never_extends_span() {
    fn prop(seed: String, tail: Vec<String>) -> TestResult {
        let Some(name) = identifier(&seed) else {
            return TestResult::discard();
        };
        if tail.iter().any(|line| line.contains(')')) {
            return TestResult::discard();
        }
        let header = format!("{name} := (");
        let source = std::iter::once(header.clone()).chain(tail).collect::<Vec<_>>().join("\n");
        let end = end_of_definition(&SourceLines::new(&source), 0, 10_000);
        TestResult::from_bool(end == Position::new(0, header.chars().count()))
    }

    QuickCheck::new()
        .tests(200)
        .quickcheck(prop as fn(String, Vec<String>) -> TestResult);
}
