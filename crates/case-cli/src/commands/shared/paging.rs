/// Resolve page bounds: `--limit` → configured default; offset defaults to 0.
#[must_use]
pub fn effective_page(
    offset: Option<u32>,
    global_limit: Option<u32>,
    default_limit: u32,
) -> (u32, u32) {
    (global_limit.unwrap_or(default_limit), offset.unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::effective_page;

    #[test]
    fn limit_flag_takes_precedence_over_default() {
        assert_eq!(effective_page(Some(10), Some(50), 200), (50, 10));
    }

    #[test]
    fn defaults_apply_when_nothing_set() {
        assert_eq!(effective_page(None, None, 200), (200, 0));
    }
}
