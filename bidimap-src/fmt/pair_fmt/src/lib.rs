use std::fmt;

pub struct Pair<A, B>(pub A, pub B);
pub struct StrJoin<'a, I>(pub I, pub &'a str);

impl<A: fmt::Display, B: fmt::Display> fmt::Display for Pair<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

impl<I, T: fmt::Display> fmt::Display for StrJoin<'_, I>
where
    I: IntoIterator<Item = T> + Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.0.clone().into_iter();
        if let Some(first) = iter.next() {
            write!(f, "{}", first)?;
        }
        for rest in iter {
            write!(f, "{}{}", self.1, rest)?;
        }
        Ok(())
    }
}

#[test]
fn pair() {
    assert_eq!(Pair("apple", 3).to_string(), "(apple, 3)");
    assert_eq!(Pair(1, Pair(2, 3)).to_string(), "(1, (2, 3))");
}

#[test]
fn str_join() {
    assert_eq!(StrJoin([1, 2, 3], ", ").to_string(), "1, 2, 3");
    assert_eq!(StrJoin([1], ", ").to_string(), "1");
    assert_eq!(StrJoin(std::iter::empty::<i32>(), ", ").to_string(), "");

    let pairs = [("apple", 3), ("banana", 5)];
    let joined =
        StrJoin(pairs.iter().map(|&(a, b)| Pair(a, b)), ", ").to_string();
    assert_eq!(joined, "(apple, 3), (banana, 5)");
}
