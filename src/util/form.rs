//! Input coercion for the add-sweet form.
//!
//! Price and quantity arrive as text from the DOM; they are coerced to the
//! wire's numeric types before submission and rejected client-side when they
//! cannot represent a valid non-negative value.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Parse a price input into a non-negative decimal.
pub fn parse_price(input: &str) -> Result<f64, &'static str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Enter a price.");
    }
    let price: f64 = trimmed.parse().map_err(|_| "Price must be a number.")?;
    if !price.is_finite() || price < 0.0 {
        return Err("Price must be zero or more.");
    }
    Ok(price)
}

/// Parse a quantity input into a non-negative integer.
pub fn parse_quantity(input: &str) -> Result<u32, &'static str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Enter a quantity.");
    }
    trimmed
        .parse()
        .map_err(|_| "Quantity must be a whole number of zero or more.")
}
