use rook_runtime::prelude::*;

/// Returns a RValue::List from a slice of RValues
pub fn list(values: &[RValue]) -> RValue {
    RList::with_data(values.to_vec()).into()
}

/// Returns a RValue::List from a slice of strings
pub fn string_list(values: &[&str]) -> RValue {
    let values = values
        .iter()
        .map(|s| RValue::from(*s))
        .collect::<Vec<_>>();
    list(&values)
}

/// Returns a RValue::Map from a slice of string keys and values
pub fn map(entries: &[(&str, RValue)]) -> RValue {
    let result = RMap::with_capacity(entries.len());
    for (key, value) in entries {
        result.insert(*key, value.clone());
    }
    result.into()
}
