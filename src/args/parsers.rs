pub(crate) fn parse_positive_usize(value: &str) -> Result<usize, String> {
    let parsed: usize = value
        .parse()
        .map_err(|err| format!("Invalid value '{}': {}", value, err))?;
    if parsed == 0 {
        return Err("Value must be > 0.".to_owned());
    }
    Ok(parsed)
}
