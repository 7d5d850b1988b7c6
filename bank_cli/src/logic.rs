//! A REPL over an in-process ledger
//!
//! Uses the same commands as the web client, without a service behind it.
//! The ledger lives only as long as the loop does.

use bank_common::cli::constants::PROMPT;
use bank_common::cli::helpers::{format_transactions, help_contents, read_line_from, Input};
use bank_common::cli::{parse_command, Command};
use bank_common::Ledger;
use std::io::{self, stdin, stdout, BufRead, Write};

/// **Runs the REPL on standard input and output until `quit` or the end of input.**
///
/// # Errors
/// - Writing to `stdout` fails.
pub fn main_loop() -> io::Result<()> {
    run_loop(&mut stdin().lock(), &mut stdout())
}

/// **Runs the REPL over the given input and output until `quit` or the end of input.**
///
/// # Errors
/// - Writing to `writer` fails.
pub fn run_loop<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> io::Result<()> {
    let mut ledger = Ledger::new();

    loop {
        let line = match read_line_from(reader, writer, PROMPT)? {
            Input::Line(line) => line,
            Input::Blank => continue,
            Input::Eof => break,
        };

        match parse_command(&line) {
            Ok(Command::Help) => writeln!(writer, "{}", help_contents())?,
            Ok(Command::Quit) => break,
            Ok(command) => {
                if let Some(output) = run_command(&mut ledger, command) {
                    writeln!(writer, "{output}")?;
                }
            }
            Err(err) => eprintln!("[ERROR] {}", err),
        }
    }

    Ok(())
}

/// **Runs a command against the ledger and returns what to print.**
///
/// `Help` and `Quit` don't touch the ledger, so they produce no output here.
pub fn run_command(ledger: &mut Ledger, command: Command) -> Option<String> {
    match command {
        Command::Deposit(amount) => Some(format!(
            "Deposit successful. Current balance: {}",
            ledger.deposit(amount)
        )),
        Command::Withdraw(amount) => Some(format!(
            "Withdrawal successful. Current balance: {}",
            ledger.withdraw(amount)
        )),
        Command::Statement => Some(ledger.statement()),
        Command::History => Some(format_transactions(&ledger.history())),
        Command::HistoryByDate(date) => Some(format_transactions(&ledger.history_by_date(date))),
        Command::Balance => Some(format!("The current balance: {}", ledger.balance())),
        Command::Help | Command::Quit => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, NaiveDate};

    fn run(ledger: &mut Ledger, line: &str) -> Option<String> {
        run_command(ledger, parse_command(line).unwrap())
    }

    #[test]
    fn deposit_and_withdraw() {
        let mut ledger = Ledger::new();

        assert_eq!(
            Some("Deposit successful. Current balance: 100".to_string()),
            run(&mut ledger, "deposit 100")
        );
        assert_eq!(
            Some("Withdrawal successful. Current balance: -20".to_string()),
            run(&mut ledger, "w 120")
        );
        assert_eq!(
            Some("The current balance: -20".to_string()),
            run(&mut ledger, "balance")
        );
    }

    #[test]
    fn statement_matches_the_ledger() {
        let mut ledger = Ledger::new();
        run(&mut ledger, "d 42");

        assert_eq!(Some(ledger.statement()), run(&mut ledger, "statement"));
    }

    #[test]
    fn history_of_fresh_ledger() {
        let mut ledger = Ledger::new();

        assert_eq!(
            Some("No transactions.".to_string()),
            run(&mut ledger, "history")
        );
    }

    #[test]
    fn history_lists_every_transaction() {
        let mut ledger = Ledger::new();
        run(&mut ledger, "d 10");
        run(&mut ledger, "d 20");
        run(&mut ledger, "w 5");

        assert_eq!(3, run(&mut ledger, "hi").unwrap().lines().count());
    }

    #[test]
    fn history_by_date() {
        let mut ledger = Ledger::new();
        run(&mut ledger, "d 10");

        let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
        assert_eq!(
            1,
            run(&mut ledger, &format!("hd {today}"))
                .unwrap()
                .lines()
                .count()
        );
        assert_eq!(
            Some("No transactions.".to_string()),
            run_command(
                &mut ledger,
                Command::HistoryByDate(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap())
            )
        );
    }

    fn run_lines(input: &str) -> String {
        let mut output = Vec::new();
        run_loop(&mut input.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn loop_ends_at_end_of_input() {
        let output = run_lines("d 10\n");

        assert!(output.contains("Deposit successful. Current balance: 10"));
        assert_eq!(2, output.matches(PROMPT).count());
    }

    #[test]
    fn loop_ends_at_empty_input() {
        assert_eq!(format!("\n{PROMPT}"), run_lines(""));
    }

    #[test]
    fn loop_ends_at_quit() {
        let output = run_lines("d 10\nq\nd 20\n");

        assert!(output.contains("Current balance: 10"));
        assert!(!output.contains("Current balance: 30"));
    }

    #[test]
    fn loop_skips_blank_and_invalid_lines() {
        let output = run_lines("\n   \nsend 5\nd 7\nhelp\nb\n");

        assert!(output.contains(&help_contents()));
        assert!(output.contains("The current balance: 7"));
    }

    #[test]
    fn help_and_quit_have_no_output() {
        let mut ledger = Ledger::new();

        assert_eq!(None, run(&mut ledger, "help"));
        assert_eq!(None, run(&mut ledger, "q"));
        assert!(ledger.is_empty());
    }
}
