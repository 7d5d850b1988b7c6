use crate::DEFAULT_BASE_URL;
use bank_common::cli::constants::PROMPT;
use bank_common::cli::helpers::*;
use bank_common::cli::{parse_command, Command};
use bank_common::requests::*;
use bank_common::validation::QUERY_DATE_FORMAT;
use bank_common::Transaction;
use reqwest::{Client, StatusCode, Url};
use std::error::Error;
use std::io::{stdin, stdout, BufRead, Write};

/// What a command has to show: `Ok` goes to `stdout`, `Err` to `stderr`.
pub type Output = Result<String, String>;

pub async fn main_loop(base_url: Url) -> Result<(), Box<dyn Error>> {
    run_loop(&mut stdin().lock(), &mut stdout(), &base_url).await
}

/// **Runs the REPL over the given input and output until `quit` or the end of input.**
///
/// Errors reported by the service are printed to `stderr`
/// and don't stop the loop; failing to reach the service does.
pub async fn run_loop<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    base_url: &Url,
) -> Result<(), Box<dyn Error>> {
    let client = Client::new();

    loop {
        let line = match read_line_from(reader, writer, PROMPT)? {
            Input::Line(line) => line,
            Input::Blank => continue,
            Input::Eof => break,
        };

        let command = match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => command,
            Err(err) => {
                eprintln!("[ERROR] {}", err);
                continue;
            }
        };

        match run_command(&client, base_url, command).await? {
            Ok(text) => writeln!(writer, "{}", text)?,
            Err(text) => eprintln!("[ERROR] {}", text),
        }
    }

    Ok(())
}

/// **Get base URL**
///
/// Tries to create a URL from the provided argument.
///
/// If that is not possible, falls back to a default.
///
/// It returns a URL in any case.
///
/// This is meant to be a base URL for all operations.
///
/// - If the provided argument is the `None` variant,
///   returns a default value as the base URL.
/// - If it's a `String`, tries to parse it into URL.
///   - If it's a valid URL string, returns it as URL.
///   - If it's a malformed URL string, returns the default.
///
/// The default value is [`DEFAULT_BASE_URL`].
pub fn get_base_url(base_url: Option<String>) -> Url {
    let default = || Url::parse(DEFAULT_BASE_URL).expect("The default base URL is valid.");

    let Some(base_url) = base_url else {
        println!(
            "No CLI base URL provided; using default: {}",
            DEFAULT_BASE_URL
        );
        return default();
    };

    Url::parse(base_url.as_str()).unwrap_or_else(|_| {
        println!(
            "Provided base URL could not be parsed; using default: {}",
            DEFAULT_BASE_URL
        );
        default()
    })
}

/// **Runs a command against the service and returns what to show.**
///
/// `Quit` has nothing to show; the loop handles it before getting here.
///
/// # Errors
/// - The service can't be reached, or its response can't be read.
pub async fn run_command(
    client: &Client,
    base_url: &Url,
    command: Command,
) -> Result<Output, Box<dyn Error>> {
    match command {
        Command::Help => Ok(Ok(help_contents())),
        Command::Deposit(amount) => {
            account_update_request(client, base_url, "account/deposit", amount).await
        }
        Command::Withdraw(amount) => {
            account_update_request(client, base_url, "account/withdraw", amount).await
        }
        Command::Statement => statement(client, base_url).await,
        Command::History => history(client, base_url).await,
        Command::HistoryByDate(date) => {
            let request = HistoryByDateRequest {
                date: date.format(QUERY_DATE_FORMAT).to_string(),
            };
            history_by_date(client, base_url, &request).await
        }
        Command::Balance => balance(client, base_url).await,
        Command::Quit => Ok(Ok(String::new())),
    }
}

/// **Send a POST request for `deposit` and `withdraw`**
///
/// Both always succeed on the service's side; the response is the new balance.
async fn account_update_request(
    client: &Client,
    base_url: &Url,
    path: &str,
    amount: i64,
) -> Result<Output, Box<dyn Error>> {
    let url = base_url.join(path)?;

    let response = client
        .post(url)
        .query(&AmountRequest { amount })
        .send()
        .await?;

    let status = response.status();
    Ok(text_output(status, response.text().await?))
}

/// **Fetch the statement of the most recent transaction**
async fn statement(client: &Client, base_url: &Url) -> Result<Output, Box<dyn Error>> {
    let url = base_url.join("account/statement")?;
    let response = client.get(url).send().await?;

    let status = response.status();
    Ok(text_output(status, response.text().await?))
}

/// **Fetch the entire transaction log**
async fn history(client: &Client, base_url: &Url) -> Result<Output, Box<dyn Error>> {
    let url = base_url.join("account/history")?;
    let response = client.get(url).send().await?;

    let status = response.status();
    let body = response.text().await?;
    Ok(history_output("The transaction history", status, &body))
}

/// **Fetch the transactions made on a given day**
///
/// The date has already been validated locally,
/// but the service validates it again and may reject it.
async fn history_by_date(
    client: &Client,
    base_url: &Url,
    request: &HistoryByDateRequest,
) -> Result<Output, Box<dyn Error>> {
    let url = base_url.join("account/historyByDate")?;
    let response = client.get(url).query(request).send().await?;

    let status = response.status();
    let body = response.text().await?;
    Ok(history_output(
        &format!("The transaction history on {}", request.date),
        status,
        &body,
    ))
}

/// **Fetch the current balance**
///
/// The service has no balance endpoint,
/// so the balance is taken from the most recent transaction.
async fn balance(client: &Client, base_url: &Url) -> Result<Output, Box<dyn Error>> {
    let url = base_url.join("account/history")?;
    let response = client.get(url).send().await?;

    let status = response.status();
    let body = response.text().await?;
    Ok(balance_output(status, &body))
}

/// A plain-text response as is, or the status and the body of a failed one
fn text_output(status: StatusCode, body: String) -> Output {
    if status.is_success() {
        Ok(body)
    } else {
        Err(format!("{} \"{}\"", status, body))
    }
}

/// Decodes a JSON list of transactions from a successful response.
fn transactions(status: StatusCode, body: &str) -> Result<Vec<Transaction>, String> {
    if !status.is_success() {
        return Err(format!("{} \"{}\"", status, body));
    }

    serde_json::from_str(body).map_err(|err| format!("Malformed transaction list: {}", err))
}

fn history_output(title: &str, status: StatusCode, body: &str) -> Output {
    transactions(status, body).map(|history| format!("{}:\n{}", title, format_transactions(&history)))
}

fn balance_output(status: StatusCode, body: &str) -> Output {
    transactions(status, body).map(|history| format!("The current balance: {}", balance_of(&history)))
}

/// The balance after the last of the given transactions, or zero if there are none
fn balance_of(history: &[Transaction]) -> i64 {
    history.last().map_or(0, |tx| tx.balance())
}
