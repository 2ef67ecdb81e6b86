//! Phase 1 tests: Type Classification — capability scan and exclusion precedence
//! T1-CLS-01 through T1-CLS-08

use leaklint_analysis::classify::{ExclusionList, TypeClassifier, DISPOSABLE_INTERFACE};
use leaklint_analysis::semantic::TypeDescriptor;
use proptest::prelude::*;

fn disposable(namespace: &str, name: &str) -> TypeDescriptor {
    TypeDescriptor::new(namespace, name).with_interface(DISPOSABLE_INTERFACE)
}

/// T1-CLS-01: A type carrying the release capability is disposable.
#[test]
fn test_capability_makes_type_disposable() {
    let classifier = TypeClassifier::new();
    let ty = disposable("System.IO", "FileStream");
    assert!(classifier.is_disposable(Some(&ty)));
}

/// T1-CLS-02: A type without the capability is never disposable, whatever
/// else it implements.
#[test]
fn test_no_capability_means_not_disposable() {
    let classifier = TypeClassifier::new();
    let plain = TypeDescriptor::new("System.Text", "StringBuilder");
    assert!(!classifier.is_disposable(Some(&plain)));

    let busy = TypeDescriptor::new("System.Collections", "ArrayList")
        .with_interface("System.Collections.IList")
        .with_interface("System.ICloneable");
    assert!(!classifier.is_disposable(Some(&busy)));
}

/// T1-CLS-03: The built-in exclusions win over the capability.
#[test]
fn test_builtin_exclusions_override_capability() {
    let classifier = TypeClassifier::new();
    let memory_stream = disposable("System.IO", "MemoryStream");
    let task = disposable("System.Threading.Tasks", "Task");
    assert!(!classifier.is_disposable(Some(&memory_stream)));
    assert!(!classifier.is_disposable(Some(&task)));
}

/// T1-CLS-04: Exclusion is decided on the name pair alone; the interface
/// set is never consulted for an excluded type.
#[test]
fn test_exclusion_ignores_interface_set() {
    let classifier = TypeClassifier::new();
    let bare = TypeDescriptor::new("System.IO", "MemoryStream");
    let stacked = disposable("System.IO", "MemoryStream")
        .with_interface("System.IAsyncDisposable")
        .with_interface("System.ICloneable");
    assert!(!classifier.is_disposable(Some(&bare)));
    assert!(!classifier.is_disposable(Some(&stacked)));
}

/// T1-CLS-05: An unresolved type is not disposable.
#[test]
fn test_unresolved_type_is_not_disposable() {
    let classifier = TypeClassifier::new();
    assert!(!classifier.is_disposable(None));
}

/// T1-CLS-06: Config entries extend the exclusion list; malformed entries
/// are skipped without disturbing the rest.
#[test]
fn test_extra_exclusions_from_config() {
    let extra = vec![
        "MyApp.Pools.PooledBuffer".to_string(),
        "nodot".to_string(),
        ".LeadingDot".to_string(),
        "TrailingDot.".to_string(),
    ];
    let list = ExclusionList::with_extra(&extra);
    assert!(list.contains("MyApp.Pools", "PooledBuffer"));
    assert!(list.contains("System.IO", "MemoryStream"));
    assert_eq!(list.len(), 3, "malformed entries must be dropped");

    let classifier = TypeClassifier::with_exclusions(list);
    let pooled = disposable("MyApp.Pools", "PooledBuffer");
    assert!(!classifier.is_disposable(Some(&pooled)));
}

/// T1-CLS-07: Exclusion matches the namespace exactly; a same-named type
/// elsewhere is still flagged.
#[test]
fn test_exclusion_namespace_must_match_exactly() {
    let classifier = TypeClassifier::new();
    let shadow = disposable("MyApp.IO", "MemoryStream");
    assert!(classifier.is_disposable(Some(&shadow)));
}

/// T1-CLS-08: Only the fully qualified capability name counts; a bare
/// `IDisposable` or a lookalike does not.
#[test]
fn test_capability_name_is_fully_qualified() {
    let classifier = TypeClassifier::new();
    let bare = TypeDescriptor::new("MyApp", "Resource").with_interface("IDisposable");
    let lookalike =
        TypeDescriptor::new("MyApp", "Resource").with_interface("MyApp.IDisposable");
    assert!(!classifier.is_disposable(Some(&bare)));
    assert!(!classifier.is_disposable(Some(&lookalike)));
}

proptest! {
    #[test]
    fn excluded_pair_never_flagged(interfaces in proptest::collection::vec("[A-Za-z.]{1,20}", 0..6)) {
        let classifier = TypeClassifier::new();
        let mut ty = TypeDescriptor::new("System.IO", "MemoryStream")
            .with_interface(DISPOSABLE_INTERFACE);
        for interface in interfaces {
            ty = ty.with_interface(interface);
        }
        prop_assert!(!classifier.is_disposable(Some(&ty)));
    }

    #[test]
    fn capability_decides_for_unexcluded_types(
        namespace in "[a-z]{1,8}",
        name in "[A-Z][a-z]{0,7}",
    ) {
        let classifier = TypeClassifier::new();
        let with_capability = TypeDescriptor::new(namespace.clone(), name.clone())
            .with_interface(DISPOSABLE_INTERFACE);
        let without = TypeDescriptor::new(namespace, name);
        prop_assert!(classifier.is_disposable(Some(&with_capability)));
        prop_assert!(!classifier.is_disposable(Some(&without)));
    }

    #[test]
    fn no_marker_never_flagged(interfaces in proptest::collection::vec("[A-Za-z.]{1,20}", 0..6)) {
        let classifier = TypeClassifier::new();
        let mut ty = TypeDescriptor::new("MyApp", "Widget");
        for interface in interfaces {
            prop_assume!(interface != DISPOSABLE_INTERFACE);
            ty = ty.with_interface(interface);
        }
        prop_assert!(!classifier.is_disposable(Some(&ty)));
    }
}
