/// Computes the Last.fm request signature.
///
/// Pairs are ordered by key, concatenated as `key value key value ...` with no
/// separators, followed by the shared secret; the result is the lowercase hex
/// MD5 digest of that string. The caller's slice is left untouched.
pub fn build_signature<K, V>(params: &[(K, V)], secret: &str) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut sorted: Vec<(&str, &str)> = params
        .iter()
        .map(|(key, value)| (key.as_ref(), value.as_ref()))
        .collect();
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    let mut payload = String::new();
    for (key, value) in sorted {
        payload.push_str(key);
        payload.push_str(value);
    }
    payload.push_str(secret);

    format!("{:x}", md5::compute(payload.as_bytes()))
}
