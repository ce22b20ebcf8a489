use super::{FieldValue, Record, Scalar, Tags, Visibility};

/// Depth-first traversal shared by rendering and severity evaluation.
///
/// Fields are visited in declaration order. Private fields and absent
/// optional references contribute nothing; nested records extend the dotted
/// path with `<field name>.` and never reach the handler themselves; every
/// leaf invokes `visit` with its fully composed path, value, and tags.
///
/// The first handler error aborts the whole traversal and propagates
/// unchanged.
pub(crate) fn walk<E>(
    record: &dyn Record,
    parent: &str,
    visit: &mut dyn FnMut(&str, &Scalar, &Tags) -> Result<(), E>,
) -> Result<(), E> {
    for field in record.fields() {
        if field.visibility() != Visibility::Public {
            continue;
        }

        match field.value() {
            FieldValue::Absent => {}
            FieldValue::Record(nested) => walk(*nested, &format!("{parent}{}.", field.name()), visit)?,
            FieldValue::Leaf(value) => visit(&format!("{parent}{}", field.name()), value, field.tags())?,
        }
    }

    Ok(())
}
