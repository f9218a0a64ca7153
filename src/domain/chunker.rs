//! 文本分块器
//!
//! 将整段文本切分为不超过合成服务输入上限的有序块
//! 尽量保持单词边界，超长单词按上限强制切分

/// 默认块长上限（字符数）
/// 合成服务单次输入上限为 4096 字符，此处留出安全余量
pub const DEFAULT_CHUNK_LIMIT: usize = 3900;

/// 归一化空白：连续空白折叠为单个空格，去除首尾空白
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// 以空的当前块接收一个单词
///
/// 单词不超过上限时直接作为当前块；超过上限时按上限硬切，
/// 切满的部分直接进入结果，余量（可能仍超限，循环处理）作为新的当前块
fn start_chunk_with_word(
    chunks: &mut Vec<String>,
    current: &mut String,
    current_len: &mut usize,
    word: &str,
    limit: usize,
) {
    let word_len = word.chars().count();
    if word_len <= limit {
        current.push_str(word);
        *current_len = word_len;
        return;
    }

    let chars: Vec<char> = word.chars().collect();
    let mut start = 0;
    while chars.len() - start > limit {
        chunks.push(chars[start..start + limit].iter().collect());
        start += limit;
    }
    *current = chars[start..].iter().collect();
    *current_len = chars.len() - start;
}

/// 将文本切分为长度不超过 `limit` 的有序块
///
/// 切分策略：
/// 1. 归一化空白后整体不超限 → 返回单块（空文本返回单个空块，
///    空输入由调用方在发起合成前拒绝）
/// 2. 否则按空格拆词贪心装填，装不下时封存当前块另起新块
/// 3. 单词本身超限时按上限硬切，恰好等于上限的单词不会被切分
///
/// 块长以字符数计，顺序与阅读顺序一致
pub fn chunk_text(text: &str, limit: usize) -> Vec<String> {
    debug_assert!(limit > 0, "chunk limit must be positive");

    let cleaned = normalize_whitespace(text);
    if cleaned.chars().count() <= limit {
        return vec![cleaned];
    }

    let mut chunks: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in cleaned.split(' ') {
        let word_len = word.chars().count();

        if current_len == 0 {
            start_chunk_with_word(&mut chunks, &mut current, &mut current_len, word, limit);
        } else if current_len + 1 + word_len <= limit {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
            start_chunk_with_word(&mut chunks, &mut current, &mut current_len, word, limit);
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_returns_single_chunk() {
        let chunks = chunk_text("Hello world", 100);
        assert_eq!(chunks, vec!["Hello world"]);
    }

    #[test]
    fn test_empty_text_returns_single_empty_chunk() {
        // 空输入返回单个空块，由调用方负责拒绝
        let chunks = chunk_text("", 100);
        assert_eq!(chunks, vec![""]);

        let chunks = chunk_text("   \n\t  ", 100);
        assert_eq!(chunks, vec![""]);
    }

    #[test]
    fn test_whitespace_is_normalized() {
        let chunks = chunk_text("  one\n\ntwo\t three  ", 100);
        assert_eq!(chunks, vec!["one two three"]);
    }

    #[test]
    fn test_packs_words_up_to_limit() {
        let chunks = chunk_text("aaa bbb ccc", 7);
        assert_eq!(chunks, vec!["aaa bbb", "ccc"]);
    }

    #[test]
    fn test_every_chunk_within_limit() {
        let text = "The quick brown fox jumps over the lazy dog. ".repeat(200);
        for limit in [10, 25, 40, 3900] {
            for chunk in chunk_text(&text, limit) {
                assert!(
                    chunk.chars().count() <= limit,
                    "chunk of {} chars exceeds limit {}",
                    chunk.chars().count(),
                    limit
                );
            }
        }
    }

    #[test]
    fn test_word_exactly_at_limit_is_not_split() {
        let word = "x".repeat(10);
        let text = format!("short {} tail", word);
        let chunks = chunk_text(&text, 10);
        assert!(chunks.contains(&word));
    }

    #[test]
    fn test_oversized_word_is_hard_split() {
        let chunks = chunk_text("abcdefghij", 3);
        assert_eq!(chunks, vec!["abc", "def", "ghi", "j"]);
    }

    #[test]
    fn test_oversized_carry_is_split_again() {
        // 10000 字符的连续串在 3900 上限下必须切成 3900/3900/2200
        // 第一次硬切后的余量仍超限，需要继续切而不是原样留下
        let text = "a".repeat(10_000);
        let chunks = chunk_text(&text, 3900);
        let lens: Vec<usize> = chunks.iter().map(|c| c.chars().count()).collect();
        assert_eq!(lens, vec![3900, 3900, 2200]);
    }

    #[test]
    fn test_order_and_reconstruction() {
        // 无强制切分时，以单空格拼回即为归一化文本
        let text = "one two three four five six seven eight nine ten";
        let chunks = chunk_text(text, 12);
        assert_eq!(chunks.join(" "), text);
    }

    #[test]
    fn test_deterministic() {
        let text = "word ".repeat(500) + &"y".repeat(50);
        assert_eq!(chunk_text(&text, 37), chunk_text(&text, 37));
    }

    #[test]
    fn test_limit_counts_chars_not_bytes() {
        // 多字节字符按字符数计长
        let text = "好".repeat(8);
        let chunks = chunk_text(&text, 3);
        let lens: Vec<usize> = chunks.iter().map(|c| c.chars().count()).collect();
        assert_eq!(lens, vec![3, 3, 2]);
    }
}
