#![no_main]

use envelope::FieldDescriptor;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let descriptor = FieldDescriptor::parse(data);

    // The key never contains the separator.
    assert!(!descriptor.key().contains(','));

    // Rendering and re-parsing is stable once normalized.
    let normalized = descriptor.to_string();
    let reparsed = FieldDescriptor::parse(&normalized);
    assert_eq!(reparsed.key(), descriptor.key());
    assert_eq!(reparsed.is_required(), descriptor.is_required());

    let _ = format!("{descriptor:?}");
});
