//! Reduce `validator` output to the single message reported to clients.

use validator::{Validate, ValidationErrors, ValidationErrorsKind};

/// Declared order of a DTO's fields; decides which failure is reported first.
pub trait FieldOrder {
    const FIELDS: &'static [&'static str];
}

/// Validate `data` and return the first failing constraint's message, if any.
///
/// Fields are checked in `FieldOrder::FIELDS` order and constraints in the
/// order they are declared on the field.
pub fn first_violation<T>(data: &T) -> Option<String>
where
    T: Validate + FieldOrder,
{
    let errors = data.validate().err()?;
    Some(first_message(&errors, T::FIELDS))
}

fn first_message(errors: &ValidationErrors, order: &[&str]) -> String {
    let kinds = errors.errors();

    let ordered = order.iter().filter_map(|field| kinds.get(*field));
    // Anything not named in the order (nested structs) goes last.
    let rest = kinds
        .iter()
        .filter(|(field, _)| {
            let name: &str = field.as_ref();
            !order.contains(&name)
        })
        .map(|(_, kind)| kind);

    ordered
        .chain(rest)
        .find_map(|kind| match kind {
            ValidationErrorsKind::Field(list) => list.first().map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            }),
            ValidationErrorsKind::Struct(inner) => Some(first_message(inner, &[])),
            ValidationErrorsKind::List(items) => items
                .values()
                .next()
                .map(|inner| first_message(inner, &[])),
        })
        .unwrap_or_else(|| "Bad Request".to_string())
}
