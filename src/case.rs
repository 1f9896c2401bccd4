//! Identifier case conversion. Request bodies may spell a snake_case field in camelCase or PascalCase.

/// Convert a single identifier from snake_case to camelCase.
/// e.g. "pizza_id" -> "pizzaId", "price" -> "price"
pub fn to_camel_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut capitalize_next = false;
    for c in s.chars() {
        if c == '_' {
            capitalize_next = true;
        } else if capitalize_next {
            out.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Convert a single identifier from snake_case to PascalCase.
/// e.g. "restaurant_id" -> "RestaurantId", "price" -> "Price"
pub fn to_pascal_case(s: &str) -> String {
    let camel = to_camel_case(s);
    let mut chars = camel.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Accepted spellings for a snake_case field, in lookup priority order: snake, camel, Pascal.
/// Spellings that coincide are kept once.
pub fn aliases(field: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(3);
    for candidate in [field.to_string(), to_camel_case(field), to_pascal_case(field)] {
        if !out.contains(&candidate) {
            out.push(candidate);
        }
    }
    out
}
