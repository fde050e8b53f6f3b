#![allow(dead_code)]

use cfg_ll::Grammar;

/// `A ::= g B | g C D E`, with left-recursive `D` and `E`.
pub fn factorable() -> Grammar<&'static str> {
    Grammar::new(
        "A",
        [
            ("A", vec![vec!["g", "B"], vec!["g", "C", "D", "E"]]),
            ("B", vec![vec!["a"], vec!["b", "C"]]),
            ("C", vec![vec!["c"], vec![]]),
            ("D", vec![vec!["D", "d"], vec!["d"]]),
            ("E", vec![vec!["E", "e"], vec!["f"]]),
        ],
    )
}

/// Regular expressions over `a` and `b`, with left-recursive operators.
pub fn regex() -> Grammar<&'static str> {
    Grammar::new(
        "rexpr",
        [
            ("rexpr", vec![vec!["rexpr", "+", "rterm"], vec!["rterm"]]),
            ("rterm", vec![vec!["rterm", "rfactor"], vec!["rfactor"]]),
            ("rfactor", vec![vec!["rfactor", "*"], vec!["rprimary"]]),
            ("rprimary", vec![vec!["a"], vec!["b"]]),
        ],
    )
}

pub fn assignment() -> Grammar<&'static str> {
    Grammar::new(
        "S",
        [
            ("S", vec![vec!["A", ":=", "T"]]),
            ("A", vec![vec!["x"], vec!["y"]]),
            ("T", vec![vec!["a"], vec!["b"]]),
        ],
    )
}

/// Statements with conditionals. Left-recursive and in need of left factoring.
pub fn statements() -> Grammar<&'static str> {
    Grammar::new(
        "S",
        [
            ("S", vec![vec!["E"], vec!["S", "A"], vec!["A"]]),
            (
                "E",
                vec![
                    vec!["if", "(", "C", ")", "{", "S", "}"],
                    vec!["if", "(", "C", ")", "{", "S", "}", "else", "{", "S", "}"],
                ],
            ),
            ("A", vec![vec!["V", ":=", "T"]]),
            ("T", vec![vec!["a"], vec!["b"]]),
            ("V", vec![vec!["x"], vec!["y"]]),
            (
                "C",
                vec![
                    vec!["V", "O", "T"],
                    vec!["T", "O", "V"],
                    vec!["V", "O", "V"],
                    vec!["T", "O", "T"],
                ],
            ),
            ("O", vec![vec!["<"], vec![">"]]),
        ],
    )
}
