//! Date normalization - heterogeneous notations to canonical DD/MM/YYYY

/// Normalize a captured date token to `DD/MM/YYYY`.
///
/// Accepts `D[D]{-|/}M[M]{-|/}Y[Y][Y][Y]`: the token is split on `-` or `/`,
/// a two-digit year gets a `20` prefix, and day/month are left-padded to two
/// digits. Anything that does not split into exactly three parts is returned
/// unchanged - the normalizer is a defensive no-op, never an error.
///
/// Calendar correctness is deliberately NOT checked (day 31 in a 30-day
/// month passes through), and a three-part token of non-digits is padded and
/// joined as-is. Whether upstream should reject such values is a policy
/// decision left to the caller.
///
/// # Examples
///
/// ```
/// use placard_extractor::normalize_date;
///
/// assert_eq!(normalize_date("5-3-99"), "05/03/2099");
/// assert_eq!(normalize_date("15/12/2024"), "15/12/2024");
/// assert_eq!(normalize_date("12-2024"), "12-2024");
/// ```
pub fn normalize_date(token: &str) -> String {
    let parts: Vec<&str> = token.split(['-', '/']).collect();
    if parts.len() != 3 {
        return token.to_string();
    }

    let (day, month, mut year) = (parts[0], parts[1], parts[2].to_string());
    if year.len() == 2 {
        year.insert_str(0, "20");
    }
    format!("{:0>2}/{:0>2}/{}", day, month, year)
}
