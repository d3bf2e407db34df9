//!
//! The keyword security advisor.
//!

use std::io::BufRead;
use std::io::Write;

/// The keyword rules in precedence order.
pub const RULES: [(&str, &str); 4] = [
    (
        "reentrancy",
        "Prevent reentrancy using Checks-Effects-Interactions or ReentrancyGuard.",
    ),
    (
        "overflow",
        "Solidity 0.8.x includes checked arithmetic. Use SafeMath for older versions.",
    ),
    (
        "gas",
        "Avoid unbounded loops and heavy storage writes to reduce gas.",
    ),
    (
        "front",
        "Mitigate front-running with commit-reveal schemes or batch auctions.",
    ),
];

/// The answer when no rule matches.
pub const GENERIC_ADVICE: &str =
    "Always prioritize security and testing. Could you clarify your question?";

/// The chat commands ending the session.
pub const EXIT_COMMANDS: [&str; 2] = ["exit", "quit"];

///
/// Answers the question with the advice of the first matching rule.
///
pub fn advise(question: &str) -> &'static str {
    let question = question.to_lowercase();
    RULES
        .iter()
        .find(|(keyword, _)| question.contains(keyword))
        .map(|(_, advice)| *advice)
        .unwrap_or(GENERIC_ADVICE)
}

///
/// Answers the questions line by line until the input ends or an exit command is read.
///
pub fn chat<R, W>(input: R, mut output: W) -> std::io::Result<()>
where
    R: BufRead,
    W: Write,
{
    write!(output, "> ")?;
    output.flush()?;
    for line in input.lines() {
        let line = line?;
        let question = line.trim();
        if EXIT_COMMANDS.contains(&question) {
            break;
        }
        if !question.is_empty() {
            writeln!(output, "{}", advise(question))?;
        }
        write!(output, "> ")?;
        output.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #[test]
    fn keyword_rules() {
        assert_eq!(
            super::advise("How do I stop a REENTRANCY attack?"),
            super::RULES[0].1
        );
        assert_eq!(super::advise("integer overflow"), super::RULES[1].1);
        assert_eq!(super::advise("Gas optimizations"), super::RULES[2].1);
        assert_eq!(super::advise("front-running"), super::RULES[3].1);
        assert_eq!(super::advise("hello"), super::GENERIC_ADVICE);
    }

    #[test]
    fn first_match_wins() {
        assert_eq!(
            super::advise("does gas griefing enable reentrancy?"),
            super::RULES[0].1
        );
        assert_eq!(
            super::advise("front-running and gas wars"),
            super::RULES[2].1
        );
    }

    #[test]
    fn chat_session() {
        let input = "overflow?\n\nsomething else\nquit\nreentrancy\n";
        let mut output = Vec::new();

        super::chat(input.as_bytes(), &mut output).expect("Chat");

        let output = String::from_utf8(output).expect("Always valid");
        assert_eq!(
            output,
            format!(
                "> {}\n> > {}\n> ",
                super::RULES[1].1,
                super::GENERIC_ADVICE
            )
        );
    }
}
