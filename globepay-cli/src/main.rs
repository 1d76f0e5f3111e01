//! Globepay CLI
//!
//! Command-line client for the Globepay money-transfer API.

mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use globepay_client::GlobepayClient;
use globepay_currencies::{countries, lookup_by_country_code, lookup_currency};
use globepay_service::{FileStorage, QuoteService, Session};
use globepay_types::{
    CreateTransferRequest, CurrencyCode, PreferencesUpdate, QuoteOutcome, QuoteRequest,
    RecipientId, RecipientRequest, RegisterRequest, TransferId, domain::validation,
};

#[derive(Parser)]
#[command(name = "globepay")]
#[command(author, version, about = "Globepay money-transfer CLI", long_about = None)]
struct Cli {
    /// Base URL of the Globepay API
    #[arg(long, env = "GLOBEPAY_API_URL")]
    api_url: Option<String>,

    /// File holding the signed-in session
    #[arg(long, env = "GLOBEPAY_SESSION_FILE")]
    session_file: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate fee and received amount for a transfer
    Quote {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        #[arg(long)]
        amount: String,
        /// Use the built-in approximate rates only
        #[arg(long)]
        offline: bool,
    },
    /// Show the default currency for a country name
    Currency {
        /// Country name, e.g. "Germany"
        country: String,
    },
    /// List known countries and their currencies
    Countries,
    /// Sign in and store the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "GLOBEPAY_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create an account and store the session
    Register {
        #[arg(long)]
        email: String,
        #[arg(long, env = "GLOBEPAY_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        phone: Option<String>,
        /// Two-letter country code
        #[arg(long)]
        country: Option<String>,
    },
    /// Forget the stored session
    Logout,
    /// Show the signed-in user's profile
    Whoami,
    /// Wallet operations
    Accounts {
        #[command(subcommand)]
        action: AccountCommands,
    },
    /// Transfer operations
    Transfers {
        #[command(subcommand)]
        action: TransferCommands,
    },
    /// Wallet transaction history
    History {
        #[command(subcommand)]
        action: HistoryCommands,
    },
    /// Saved recipient operations
    Recipients {
        #[command(subcommand)]
        action: RecipientCommands,
    },
    /// Notification preferences
    Prefs {
        #[command(subcommand)]
        action: PrefsCommands,
    },
    /// Check API health
    Health,
}

#[derive(Subcommand)]
enum AccountCommands {
    /// List wallets and balances
    List,
    /// Open a wallet in another currency
    Open {
        #[arg(long)]
        currency: String,
    },
}

#[derive(Subcommand)]
enum TransferCommands {
    /// List past transfers
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
    /// Show one transfer
    Get { id: String },
    /// Send money
    Create {
        /// Recipient's full name
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: Option<String>,
        /// Recipient's two-letter country code
        #[arg(long)]
        country: String,
        #[arg(long)]
        bank: String,
        #[arg(long)]
        account: String,
        #[arg(long)]
        swift: Option<String>,
        #[arg(long, default_value = "USD")]
        from: String,
        /// Defaults to the recipient country's currency
        #[arg(long)]
        to: Option<String>,
        #[arg(long)]
        amount: String,
        #[arg(long, default_value = "family support")]
        purpose: String,
    },
    /// Cancel a pending transfer
    Cancel { id: String },
}

#[derive(Subcommand)]
enum HistoryCommands {
    /// List wallet transactions
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
    /// Show one transaction
    Get { id: String },
}

#[derive(Subcommand)]
enum RecipientCommands {
    /// List saved recipients
    List,
    /// Save a recipient
    Add {
        #[arg(long)]
        name: String,
        /// Two-letter country code
        #[arg(long)]
        country: String,
        #[arg(long)]
        bank: String,
        #[arg(long)]
        account: String,
        #[arg(long)]
        swift: Option<String>,
        #[arg(long)]
        iban: Option<String>,
        #[arg(long)]
        currency: Option<String>,
    },
    /// Delete a saved recipient
    Delete { id: String },
}

#[derive(Subcommand)]
enum PrefsCommands {
    /// Show preferences
    Get,
    /// Change selected preferences
    Set {
        #[arg(long)]
        language: Option<String>,
        #[arg(long)]
        timezone: Option<String>,
        /// Email notifications on/off (requires --sms-notifications too)
        #[arg(long, requires = "sms_notifications")]
        email_notifications: Option<bool>,
        /// SMS notifications on/off (requires --email-notifications too)
        #[arg(long, requires = "email_notifications")]
        sms_notifications: Option<bool>,
    },
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "warn,globepay_cli=info".into());
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn parse_currency(s: &str) -> Result<CurrencyCode> {
    s.parse().map_err(|_| {
        let supported: Vec<&str> = CurrencyCode::all().iter().map(|c| c.code()).collect();
        anyhow::anyhow!(
            "Unknown currency: {}. Supported: {}",
            s,
            supported.join(", ")
        )
    })
}

/// Destination currency for a transfer: explicit, else the country default.
fn resolve_dest_currency(explicit: Option<&str>, country_code: &str) -> Result<CurrencyCode> {
    match explicit {
        Some(code) => parse_currency(code),
        None => lookup_by_country_code(country_code)
            .map(|row| row.currency)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown country code {}; pass --to explicitly",
                    country_code
                )
            }),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_quote(outcome: &QuoteOutcome) -> Result<()> {
    let quote = &outcome.quote;
    print_json(&serde_json::json!({
        "sourceAmount": quote.source_amount().value(),
        "sourceCurrency": quote.source_amount().currency(),
        "destCurrency": quote.dest_currency(),
        "rate": quote.rate(),
        "fee": quote.fee().value(),
        "feeTier": quote.fee_tier(),
        "convertedAmount": quote.converted_amount(),
        "display": quote.display_converted(),
        "rateSource": outcome.rate_source,
    }))?;
    if outcome.is_approximate() {
        eprintln!("note: rate service unavailable, amounts use an approximate rate");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let mut config = config::Config::from_env()?;
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }
    if let Some(path) = cli.session_file {
        config.session_file = path;
    }
    tracing::debug!(api_url = %config.api_url, "configuration loaded");

    let session = Session::new(FileStorage::new(&config.session_file));
    let stored = session.load().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "ignoring unreadable session file");
        None
    });
    let client = GlobepayClient::with_timeout(&config.api_url, config.rate_timeout)
        .with_session(stored.as_ref());

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            let ready = healthy && client.readiness().await.unwrap_or(false);
            if healthy {
                println!("✓ API is healthy{}", if ready { " and ready" } else { "" });
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Quote {
            from,
            to,
            amount,
            offline,
        } => {
            let amount = validation::parse_amount(&amount)?;
            let req = QuoteRequest::new(amount, from, to);
            let service = QuoteService::new(client).with_timeout(config.rate_timeout);
            let outcome = if offline {
                service.quote_offline(&req)?
            } else {
                service.quote(&req).await?
            };
            print_quote(&outcome)?;
        }

        Commands::Currency { country } => {
            let currency = lookup_currency(&country);
            println!("{} ({})", currency, currency.name());
        }

        Commands::Countries => {
            print_json(&countries())?;
        }

        Commands::Login { email, password } => {
            validation::validate_email(&email)?;
            let auth = client.login(&email, &password).await?;
            session.store(&auth)?;
            tracing::info!(user = %auth.user.email, "signed in");
            println!("✓ Signed in as {}", auth.user.full_name());
        }

        Commands::Register {
            email,
            password,
            first_name,
            last_name,
            phone,
            country,
        } => {
            validation::validate_email(&email)?;
            validation::validate_password(&password)?;
            if let Some(phone) = &phone {
                validation::validate_phone_number(phone)?;
            }
            let req = RegisterRequest {
                email,
                password,
                first_name,
                last_name,
                phone_number: phone,
                date_of_birth: None,
                country,
            };
            let auth = client.register(&req).await?;
            session.store(&auth)?;
            println!("✓ Registered {}", auth.user.email);
        }

        Commands::Logout => {
            session.clear()?;
            println!("✓ Signed out");
        }

        Commands::Whoami => {
            let user = client.get_profile().await?;
            print_json(&user)?;
        }

        Commands::Accounts { action } => match action {
            AccountCommands::List => {
                let accounts = client.list_accounts().await?;
                print_json(&accounts)?;
            }
            AccountCommands::Open { currency } => {
                let currency = parse_currency(&currency)?;
                let account = client.create_account(currency).await?;
                print_json(&account)?;
            }
        },

        Commands::Transfers { action } => match action {
            TransferCommands::List { page, limit } => {
                let page = client.list_transfers(page, limit).await?;
                print_json(&page)?;
            }
            TransferCommands::Get { id } => {
                let transfer = client.get_transfer(&TransferId::new(id)).await?;
                print_json(&transfer)?;
            }
            TransferCommands::Create {
                name,
                email,
                country,
                bank,
                account,
                swift,
                from,
                to,
                amount,
                purpose,
            } => {
                validation::validate_account_number(&account)?;
                let amount = validation::parse_amount(&amount)?;
                let source_currency = parse_currency(&from)?;
                let dest_currency = resolve_dest_currency(to.as_deref(), &country)?;

                let service = QuoteService::new(client).with_timeout(config.rate_timeout);
                let quote_req =
                    QuoteRequest::new(amount, source_currency.code(), dest_currency.code());
                let outcome = service.quote(&quote_req).await?;
                eprintln!(
                    "Sending {} (fee {}), recipient gets about {}",
                    outcome.quote.source_amount(),
                    outcome.quote.fee(),
                    outcome.quote.display_converted()
                );

                let req = CreateTransferRequest {
                    recipient_name: name,
                    recipient_email: email,
                    recipient_country: country.to_uppercase(),
                    recipient_bank_name: bank,
                    recipient_account_number: account,
                    recipient_swift_code: swift,
                    source_currency,
                    dest_currency,
                    source_amount: amount,
                    purpose,
                };
                let transfer = service.gateway().create_transfer(&req).await?;
                print_json(&transfer)?;
            }
            TransferCommands::Cancel { id } => {
                client.cancel_transfer(&TransferId::new(id)).await?;
                println!("✓ Transfer cancelled");
            }
        },

        Commands::History { action } => match action {
            HistoryCommands::List { page, limit } => {
                let page = client.list_transactions(page, limit).await?;
                print_json(&page)?;
            }
            HistoryCommands::Get { id } => {
                let transaction = client.get_transaction(&id).await?;
                print_json(&transaction)?;
            }
        },

        Commands::Recipients { action } => match action {
            RecipientCommands::List => {
                let recipients = client.list_recipients().await?;
                print_json(&recipients)?;
            }
            RecipientCommands::Add {
                name,
                country,
                bank,
                account,
                swift,
                iban,
                currency,
            } => {
                validation::validate_account_number(&account)?;
                let currency = currency.as_deref().map(parse_currency).transpose()?;
                let req = RecipientRequest {
                    name,
                    country: country.to_uppercase(),
                    bank_name: bank,
                    account_number: account,
                    swift_code: swift,
                    iban,
                    currency,
                };
                let recipient = client.create_recipient(&req).await?;
                print_json(&recipient)?;
            }
            RecipientCommands::Delete { id } => {
                client.delete_recipient(&RecipientId::new(id)).await?;
                println!("✓ Recipient deleted");
            }
        },

        Commands::Prefs { action } => match action {
            PrefsCommands::Get => {
                let prefs = client.get_preferences_or_default().await;
                print_json(&prefs)?;
            }
            PrefsCommands::Set {
                language,
                timezone,
                email_notifications,
                sms_notifications,
            } => {
                let mut update = PreferencesUpdate::default();
                if let Some(language) = language {
                    update = update.language(language);
                }
                if let Some(timezone) = timezone {
                    update = update.timezone(timezone);
                }
                if let (Some(email), Some(sms)) = (email_notifications, sms_notifications) {
                    update = update.notifications(email, sms);
                }
                if update.is_empty() {
                    anyhow::bail!("Nothing to update; pass at least one preference flag");
                }
                let prefs = client.update_preferences(&update).await?;
                print_json(&prefs)?;
            }
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_quote_command() {
        let cli = Cli::try_parse_from([
            "globepay", "quote", "--from", "USD", "--to", "EUR", "--amount", "50", "--offline",
        ])
        .unwrap();
        match cli.command {
            Commands::Quote {
                from,
                to,
                amount,
                offline,
            } => {
                assert_eq!(from, "USD");
                assert_eq!(to, "EUR");
                assert_eq!(amount, "50");
                assert!(offline);
            }
            _ => panic!("expected quote command"),
        }
    }

    #[test]
    fn test_parse_history_paging() {
        let cli = Cli::try_parse_from([
            "globepay", "history", "list", "--page", "3", "--limit", "25",
        ])
        .unwrap();
        match cli.command {
            Commands::History {
                action: HistoryCommands::List { page, limit },
            } => {
                assert_eq!(page, 3);
                assert_eq!(limit, 25);
            }
            _ => panic!("expected history list command"),
        }
    }

    #[test]
    fn test_api_url_flag_is_bound_to_env() {
        let cmd = Cli::command();
        let arg = cmd
            .get_arguments()
            .find(|a| a.get_id() == "api_url")
            .unwrap();
        assert_eq!(
            arg.get_env().and_then(|e| e.to_str()),
            Some("GLOBEPAY_API_URL")
        );
    }

    #[test]
    fn test_notification_flags_must_come_together() {
        let result = Cli::try_parse_from([
            "globepay",
            "prefs",
            "set",
            "--email-notifications",
            "true",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_currency_message_lists_supported() {
        let err = parse_currency("XYZ").unwrap_err().to_string();
        assert!(err.contains("XYZ"));
        assert!(err.contains("NGN"));
        assert_eq!(parse_currency("gbp").unwrap(), CurrencyCode::GBP);
    }

    #[test]
    fn test_dest_currency_defaults_from_country() {
        assert_eq!(resolve_dest_currency(None, "ng").unwrap(), CurrencyCode::NGN);
        assert_eq!(
            resolve_dest_currency(Some("USD"), "NG").unwrap(),
            CurrencyCode::USD
        );
        assert!(resolve_dest_currency(None, "ZZ").is_err());
    }
}
