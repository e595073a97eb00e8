//! Shannon 熵计算

/// 在固定字母表上计算 token 的 Shannon 熵
/// - 遍历整个字母表，统计每个字符在 token 中的出现次数
/// - H = −Σ p·log2(p)，p = 次数 / token 字符数；次数为 0 的字符按约定贡献 0
/// - 复杂度 O(|charset|·|token|)，属于当前规模下刻意保留的朴素实现
/// - 长度按字符计数（`§` 算一个字符），熵值非负且不超过 log2(|charset|)
pub fn shannon_entropy(token: &str, charset: &str) -> f64 {
    let len = token.chars().count();
    if len == 0 {
        return 0.0;
    }
    let len = len as f64;

    let mut entropy = 0.0f64;
    for ch in charset.chars() {
        let count = token.chars().filter(|&c| c == ch).count();
        if count > 0 {
            let p = count as f64 / len;
            entropy -= p * p.log2();
        }
    }
    entropy
}
