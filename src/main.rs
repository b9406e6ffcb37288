use std::fs::File;
use std::process::ExitCode;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use clap::{Parser, Subcommand};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use mark::api::client::ApiClient;
use mark::api::types::Profile;
use mark::core::action::Action;
use mark::core::config;
use mark::core::debounce::DebouncedTitleLoader;
use mark::core::store::Store;
use mark::core::validate::is_web_uri;
use mark::dispatch;
use mark::view::{self, Intent};

#[derive(Parser)]
#[command(name = "mark", about = "Client for the mark bookmarking server")]
struct Args {
    /// Server base URL (overrides config file and MARK_SERVER_URL)
    #[arg(long)]
    server_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch and print the bookmark feed
    Feed,
    /// Add a bookmark; the title is looked up from the page when omitted
    Add {
        url: String,
        title: Option<String>,
    },
    /// Show the signed-in user's profile
    Profile,
    /// Update profile fields
    SetProfile {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        bio: Option<String>,
    },
}

/// The composition root: owns the store, the HTTP client, the action
/// channel, and the throttled title loader. Maps intents onto dispatchers.
struct Shell {
    client: Arc<ApiClient>,
    tx: Sender<Action>,
    rx: Receiver<Action>,
    store: Store,
    title_loader: DebouncedTitleLoader,
}

impl Shell {
    fn new(server_url: String) -> Self {
        let client = Arc::new(ApiClient::new(server_url));
        let (tx, rx) = mpsc::channel();
        let title_loader = DebouncedTitleLoader::new(client.clone(), tx.clone());
        Self {
            client,
            tx,
            rx,
            store: Store::new(),
            title_loader,
        }
    }

    /// Runs the dispatcher for one intent, then folds the queued actions
    /// into the store.
    async fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::Refresh => dispatch::fetch_stream(&self.client, &self.tx).await,
            Intent::EditUrl(url) => dispatch::update_url(&self.tx, &self.title_loader, &url),
            Intent::EditTitle(title) => dispatch::update_title(&self.tx, &title),
            Intent::SubmitMark { url, title } => {
                dispatch::add_mark(&self.client, &self.tx, &url, &title).await
            }
            Intent::LoadProfile => dispatch::get_profile(&self.client, &self.tx).await,
            Intent::SaveProfile(profile) => {
                dispatch::update_profile(&self.client, &self.tx, &profile).await
            }
        }
        self.store.drain(&self.rx);
    }

    /// Blocks until the throttled title lookup's terminal action lands,
    /// folding everything seen along the way into the store.
    fn wait_for_title(&mut self) {
        while let Ok(action) = self.rx.recv_timeout(Duration::from_secs(10)) {
            let done = matches!(
                action,
                Action::LoadTitleSuccess(_) | Action::LoadTitleFailed(_)
            );
            self.store.dispatch(action);
            if done {
                break;
            }
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to mark.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("mark.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("warning: {e}, falling back to defaults");
        config::MarkConfig::default()
    });
    let config = config::resolve(&file_config, args.server_url.as_deref());
    log::info!("mark starting against {}", config.server_url);

    let mut shell = Shell::new(config.server_url.clone());

    match args.command {
        Command::Feed => {
            shell.apply(Intent::Refresh).await;
            let props = view::feed_props(shell.store.state());
            if let Some(err) = props.error {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
            for mark in &props.items {
                println!("{}\t{}", mark.title, mark.url);
            }
        }
        Command::Add { url, title } => {
            shell.apply(Intent::EditUrl(url.clone())).await;
            match title {
                Some(title) => shell.apply(Intent::EditTitle(title)).await,
                // No title given: wait for the auto-lookup to fill it in.
                None if is_web_uri(&url) => shell.wait_for_title(),
                None => {}
            }
            let form = view::add_form_props(shell.store.state());
            shell
                .apply(Intent::SubmitMark {
                    url,
                    title: form.title,
                })
                .await;
            if let Some(err) = &shell.store.state().bookmarks.error {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
            if let Some(added) = shell.store.state().bookmarks.items.last() {
                println!("added: {} ({})", added.title, added.url);
            }
        }
        Command::Profile => {
            shell.apply(Intent::LoadProfile).await;
            let props = view::profile_props(shell.store.state());
            if let Some(err) = props.error {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
            println!("name: {}", props.name);
            println!("bio:  {}", props.bio);
        }
        Command::SetProfile { name, bio } => {
            shell.apply(Intent::SaveProfile(Profile { name, bio })).await;
            let props = view::profile_props(shell.store.state());
            if let Some(err) = props.error {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
            println!("name: {}", props.name);
            println!("bio:  {}", props.bio);
        }
    }

    ExitCode::SUCCESS
}
