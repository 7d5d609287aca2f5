/// Ask the user a yes/no question, defaulting to no. Returns `true` without
/// asking if `assume_yes` is set.
pub(crate) fn confirm(message: &str, assume_yes: bool) -> anyhow::Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    inquire::Confirm::new(message)
        .with_default(false)
        .prompt()
        .map_err(|e| e.into())
}
