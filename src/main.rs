use std::io::Write;
use std::time::Instant;

use activity_board_core::app::{self, LoadView};
use activity_board_core::client::request::NoWasmClient;
use activity_board_core::error::Result;
use activity_board_core::interface::HttpClient;
use activity_board_core::message::{MessageArea, MessageKind, MessageState};
use activity_board_core::model::dtos::RosterParams;
use activity_board_core::model::structs::sample_activities;
use activity_board_core::view::{render_board, BoardView};

const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();
    let base_url = args
        .get(1)
        .cloned()
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    println!("Activity board @ {base_url}");
    println!("Type 'help' for commands.\n");

    let client = NoWasmClient::new(&base_url).await?;
    let mut area = MessageArea::new();
    let mut board: Option<BoardView> = None;

    apply_view(app::load_activities(&client).await, &mut board);

    loop {
        print_message(&mut area);

        let Some(line) = read_line("> ")? else {
            break;
        };
        let words: Vec<&str> = line.split_whitespace().collect();

        match words.as_slice() {
            [] => {}
            ["help"] => print_help(),
            ["quit"] | ["exit"] | ["q"] => break,
            ["reload"] | ["r"] => {
                apply_view(app::load_activities(&client).await, &mut board);
            }
            ["sample"] => {
                let view = render_board(&sample_activities());
                print_board(&view);
                board = Some(view);
            }
            ["signup", email, option] => {
                sign_up_command(&client, &mut area, &mut board, email, option).await?;
            }
            ["unregister", card, row] => {
                unregister_command(&client, &mut area, &mut board, card, row).await?;
            }
            _ => println!("Unrecognized command. Type 'help' for commands."),
        }
    }

    Ok(())
}

async fn sign_up_command(
    client: &NoWasmClient,
    area: &mut MessageArea,
    board: &mut Option<BoardView>,
    email: &str,
    option: &str,
) -> Result<()> {
    let Some(view) = board.as_ref() else {
        println!("No activities loaded. Try 'reload' first.");
        return Ok(());
    };

    let Ok(idx) = option.parse::<usize>() else {
        println!("'{option}' is not an activity number.");
        return Ok(());
    };
    if idx == 0 || idx >= view.options.len() {
        println!("Pick an activity number from the list (1-{}).", view.options.len() - 1);
        return Ok(());
    }

    let activity = view.options[idx].clone();
    let params = RosterParams {
        activity: &activity,
        email,
    };

    if let Some(reloaded) = app::sign_up(client, area, params, Instant::now()).await {
        apply_view(reloaded, board);
    }

    Ok(())
}

async fn unregister_command(
    client: &NoWasmClient,
    area: &mut MessageArea,
    board: &mut Option<BoardView>,
    card: &str,
    row: &str,
) -> Result<()> {
    let Some(view) = board.as_ref() else {
        println!("No activities loaded. Try 'reload' first.");
        return Ok(());
    };

    let (Ok(card_idx), Ok(row_idx)) = (card.parse::<usize>(), row.parse::<usize>()) else {
        println!("Usage: unregister <activity number> <participant number>");
        return Ok(());
    };

    let entry = view
        .cards
        .get(card_idx.wrapping_sub(1))
        .and_then(|c| c.roster.get(row_idx.wrapping_sub(1)));
    let Some(entry) = entry else {
        println!("No such participant row.");
        return Ok(());
    };

    // The tag stores the activity percent-encoded, the way the card carries
    // it; decode before it goes back into a request path.
    let activity = entry.unregister.activity_name();
    let participant = entry.unregister.participant.clone();
    let params = RosterParams {
        activity: &activity,
        email: &participant,
    };

    let confirm = || {
        matches!(
            read_line(&format!("Unregister {participant} from \"{activity}\"? [y/N] ")),
            Ok(Some(answer)) if answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
        )
    };

    if let Some(reloaded) = app::unregister(client, area, params, confirm, Instant::now()).await {
        apply_view(reloaded, board);
    }

    Ok(())
}

fn apply_view(view: LoadView, board: &mut Option<BoardView>) {
    match view {
        LoadView::Board(rendered) => {
            print_board(&rendered);
            *board = Some(rendered);
        }
        LoadView::Empty => {
            println!("No activities available right now.");
            println!("Type 'sample' to load sample activities.");
            *board = None;
        }
        LoadView::Failed { status: Some(code) } => {
            println!("Could not load activities (status {code}). Check the server or the network.");
            println!("Type 'sample' to load sample activities.");
            *board = None;
        }
        LoadView::Failed { status: None } => {
            println!("Network error: could not load activities.");
            println!("Type 'sample' to load sample activities.");
            *board = None;
        }
    }
}

fn print_board(view: &BoardView) {
    println!("============== Activities ==============");
    for (idx, card) in view.cards.iter().enumerate() {
        println!("{}. {card}", idx + 1);
    }
    println!("========================================");
}

fn print_message(area: &mut MessageArea) {
    if let MessageState::Visible { kind, text } = area.poll(Instant::now()) {
        match kind {
            MessageKind::Success => println!("[ok] {text}"),
            MessageKind::Error => println!("[error] {text}"),
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  reload                                  fetch the board again");
    println!("  sample                                  show the built-in sample activities");
    println!("  signup <email> <activity number>        sign a participant up");
    println!("  unregister <activity#> <participant#>   remove a participant (asks first)");
    println!("  quit");
}

/// Prompt and read one trimmed line; `None` means stdin was closed.
fn read_line(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    std::io::stdout().flush()?;

    let mut line = String::new();
    let bytes = std::io::stdin().read_line(&mut line)?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
