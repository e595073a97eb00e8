//! 行内候选 Token 提取（按词扫描的状态机）

/// 把一行文本拆成候选 Token
/// - 先按空白切词；词内逐字符扫描，连续的字母表字符构成一个 run
/// - 遇到字母表外字符（含任意 Unicode）即结算当前 run，然后重新累计
/// - run 长度（字符数）达到 `min_len` 才会输出；Token 不跨空白
/// - 输出顺序稳定：词序在前，词内 run 序在后
pub fn tokenize(line: &str, min_len: usize, charset: &str) -> Vec<String> {
    // 空 run 不是 Token，最小长度按 1 兜底
    let min_len = min_len.max(1);
    let mut tokens = Vec::new();

    for word in line.split_whitespace() {
        let mut run = String::new();
        let mut count = 0usize;

        for ch in word.chars() {
            if charset.contains(ch) {
                run.push(ch);
                count += 1;
            } else {
                // 字母表外字符：当前 run 到此为止
                if count >= min_len {
                    tokens.push(std::mem::take(&mut run));
                } else {
                    run.clear();
                }
                count = 0;
            }
        }

        // 词尾可能残留一个完整 run
        if count >= min_len {
            tokens.push(run);
        }
    }

    tokens
}
