//! Rule benchmarks: engine pass, scope walk, classifier, frontend.
//!
//! Benchmarks: synthetic-tree traversal at two sizes, deep guard walks,
//! classification throughput, and C# lowering over 100 files.
//! Run with: cargo bench -p leaklint-analysis --bench rule_bench

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use leaklint_analysis::classify::TypeClassifier;
use leaklint_analysis::engine::AnalysisEngine;
use leaklint_analysis::frontend::{CSharpFrontend, TypeCatalog};
use leaklint_analysis::rule::scope::is_guarded;
use leaklint_analysis::semantic::{TableSemantics, TypeDescriptor};
use leaklint_analysis::syntax::{NodeId, SyntaxKind, SyntaxTree, TreeBuilder};
use leaklint_core::span::{Pos, Span};

fn sp(line: u32) -> Span {
    Span::point(Pos::new(line, 1))
}

/// One class per iteration: a leak, a guarded binding, an excluded
/// construction, and an unresolved one.
fn synthetic_unit(classes: usize) -> (SyntaxTree, TableSemantics) {
    let mut b = TreeBuilder::new();
    let mut semantics = TableSemantics::new();
    let disposable =
        TypeDescriptor::new("System.IO", "FileStream").with_interface("System.IDisposable");
    let excluded =
        TypeDescriptor::new("System.IO", "MemoryStream").with_interface("System.IDisposable");

    b.open(SyntaxKind::SourceFile, sp(1));
    for i in 0..classes {
        let line = (i as u32) * 10 + 2;
        b.open(SyntaxKind::ClassDeclaration, sp(line));
        b.open(SyntaxKind::MethodDeclaration, sp(line + 1));
        b.open(SyntaxKind::Block, sp(line + 2));

        let leak = b.leaf(SyntaxKind::Construction, sp(line + 3));
        semantics.attach(leak, disposable.clone());

        b.open(SyntaxKind::ScopeGuard, sp(line + 4));
        b.open(SyntaxKind::Binding, sp(line + 4));
        let guarded = b.leaf(SyntaxKind::Construction, sp(line + 4));
        semantics.attach(guarded, disposable.clone());
        b.close();
        b.leaf(SyntaxKind::Block, sp(line + 5));
        b.close();

        let silent = b.leaf(SyntaxKind::Construction, sp(line + 6));
        semantics.attach(silent, excluded.clone());

        b.leaf(SyntaxKind::Construction, sp(line + 7));

        b.close();
        b.close();
        b.close();
    }
    b.close();
    (b.finish(), semantics)
}

/// A construction buried `depth` wrapper nodes under a guard binding.
fn deep_unit(depth: usize) -> (SyntaxTree, NodeId) {
    let mut b = TreeBuilder::new();
    b.open(SyntaxKind::SourceFile, sp(1));
    b.open(SyntaxKind::ScopeGuard, sp(2));
    b.open(SyntaxKind::Binding, sp(2));
    for _ in 0..depth {
        b.open(SyntaxKind::Other, sp(3));
    }
    let node = b.leaf(SyntaxKind::Construction, sp(4));
    for _ in 0..depth {
        b.close();
    }
    b.close();
    b.leaf(SyntaxKind::Block, sp(5));
    b.close();
    b.close();
    (b.finish(), node)
}

fn sample_source(idx: usize) -> String {
    format!(
        r#"using System.IO;

public class Worker_{idx}
{{
    private FileStream _log = new FileStream();

    public void Run(string path)
    {{
        using (var stream = new FileStream(path, FileMode.Open))
        {{
            var copy = new FileStream(path, FileMode.Open);
        }}
        var buffer = new MemoryStream();
    }}
}}
"#
    )
}

fn engine_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_pass");
    group.sample_size(20);

    for classes in [100usize, 1000] {
        let (tree, semantics) = synthetic_unit(classes);
        let engine = AnalysisEngine::new();

        group.bench_with_input(
            BenchmarkId::new("run_collect", classes),
            &(tree, semantics),
            |b, (tree, semantics)| {
                b.iter(|| black_box(engine.run_collect(tree, semantics)));
            },
        );
    }

    group.finish();
}

fn scope_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("scope_walk");

    for depth in [4usize, 64, 512] {
        let (tree, node) = deep_unit(depth);
        group.bench_with_input(
            BenchmarkId::new("is_guarded", depth),
            &(tree, node),
            |b, (tree, node)| {
                b.iter(|| black_box(is_guarded(tree, *node)));
            },
        );
    }

    group.finish();
}

fn classifier_check(c: &mut Criterion) {
    let classifier = TypeClassifier::new();
    let descriptors = vec![
        TypeDescriptor::new("System.IO", "FileStream").with_interface("System.IDisposable"),
        TypeDescriptor::new("System.IO", "MemoryStream").with_interface("System.IDisposable"),
        TypeDescriptor::new("System.Text", "StringBuilder"),
        TypeDescriptor::new("System.Net.Sockets", "Socket")
            .with_interface("System.ComponentModel.IComponent")
            .with_interface("System.IDisposable"),
    ];

    c.bench_function("classifier_mixed", |b| {
        b.iter(|| {
            for ty in &descriptors {
                black_box(classifier.is_disposable(Some(ty)));
            }
        });
    });
}

fn frontend_lower(c: &mut Criterion) {
    let mut group = c.benchmark_group("frontend");
    group.sample_size(20);

    let sources: Vec<String> = (0..100).map(sample_source).collect();
    let frontend = CSharpFrontend::new(TypeCatalog::builtin());

    group.bench_function("lower_100", |b| {
        b.iter(|| {
            for source in &sources {
                let _ = frontend.lower(source);
            }
        });
    });

    group.bench_function("analyze_100", |b| {
        b.iter(|| {
            for source in &sources {
                let _ = frontend.analyze_source(source);
            }
        });
    });

    group.finish();
}

criterion_group!(benches, engine_pass, scope_walk, classifier_check, frontend_lower);
criterion_main!(benches);
