use crate::model::Segment;
use crate::myers::{self, RangeTag};

/// Computes intra-line segment opcodes for a changed line pair (C2).
///
/// Operates on `char`s rather than bytes so that segment boundaries always
/// land on character boundaries, regardless of encoding.
pub(crate) fn diff_chars(a: &str, b: &str) -> (Vec<Segment>, Vec<Segment>) {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let mut pre = Vec::new();
    let mut post = Vec::new();

    for range in myers::diff_ranges(&a_chars, &b_chars) {
        match range.tag {
            RangeTag::Equal => {
                let text: String = a_chars[range.a0..range.a1].iter().collect();
                pre.push(Segment::plain(text.clone()));
                post.push(Segment::plain(text));
            }
            RangeTag::Replace => {
                pre.push(Segment::del(collect(&a_chars, range.a0, range.a1)));
                post.push(Segment::ins(collect(&b_chars, range.b0, range.b1)));
            }
            RangeTag::Delete => {
                pre.push(Segment::del(collect(&a_chars, range.a0, range.a1)));
            }
            RangeTag::Insert => {
                post.push(Segment::ins(collect(&b_chars, range.b0, range.b1)));
            }
        }
    }

    (pre, post)
}

fn collect(chars: &[char], start: usize, end: usize) -> String {
    chars[start..end].iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SegmentKind;

    #[test]
    fn single_word_replacement_is_bracketed_by_plain_segments() {
        let (pre, post) = diff_chars("foo bar baz", "foo qux baz");

        assert_eq!(
            pre,
            vec![
                Segment::plain("foo "),
                Segment::del("bar"),
                Segment::plain(" baz"),
            ]
        );
        assert_eq!(
            post,
            vec![
                Segment::plain("foo "),
                Segment::ins("qux"),
                Segment::plain(" baz"),
            ]
        );
    }

    #[test]
    fn wholly_different_lines_produce_single_del_ins_pair() {
        let (pre, post) = diff_chars("a", "b");
        assert_eq!(pre, vec![Segment::del("a")]);
        assert_eq!(post, vec![Segment::ins("b")]);
    }

    #[test]
    fn identical_lines_are_all_plain() {
        let (pre, post) = diff_chars("same", "same");
        assert!(pre.iter().all(|s| s.kind == SegmentKind::Plain));
        assert!(post.iter().all(|s| s.kind == SegmentKind::Plain));
    }

    #[test]
    fn reassembly_reproduces_both_strings() {
        let a = "interface GigabitEthernet0/1 description uplink-to-core";
        let b = "interface GigabitEthernet0/1 description uplink-to-edge";
        let (pre, post) = diff_chars(a, b);
        let reassembled_a: String = pre.iter().map(|s| s.text.as_str()).collect();
        let reassembled_b: String = post.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(reassembled_a, a);
        assert_eq!(reassembled_b, b);
    }
}
