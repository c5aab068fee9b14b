use clap::Parser;
use gridboard::{
    display_layout, Classification, FrameClassifier, GridConfig, GridEngine, Keyboard, LayoutCell,
    Mode, Point, CHAR_GROUPS,
};
use std::collections::VecDeque;
use std::io::{self, BufRead};
use std::sync::{Arc, Mutex};

/// Interactive driver for the gridboard keyboard.
#[derive(Parser, Debug)]
#[command(name = "gridboard", about = "Hierarchical grid keyboard with emoji entry")]
struct Args {
    /// Base URL of the suggestion server
    #[arg(long, default_value = "http://localhost:8081")]
    suggest_url: String,

    /// Enable suggestion lookups
    #[arg(long)]
    enable_suggest: bool,

    /// Suggestion request timeout in milliseconds
    #[arg(long, default_value_t = 500)]
    timeout_ms: u64,
}

/// Classifier fed from the terminal: `see <label> <confidence>` queues one
/// reading, each camera tick consumes one.
#[derive(Clone, Default)]
struct ManualFeed {
    readings: Arc<Mutex<VecDeque<Classification>>>,
}

impl ManualFeed {
    fn push(&self, label: &str, confidence: f32) {
        if let Ok(mut queue) = self.readings.lock() {
            queue.push_back(Classification::new(label, confidence));
        }
    }
}

impl FrameClassifier for ManualFeed {
    fn classify_frame(&mut self) -> anyhow::Result<Vec<Classification>> {
        let mut queue = self
            .readings
            .lock()
            .map_err(|_| anyhow::anyhow!("reading queue poisoned"))?;
        Ok(queue.pop_front().map(|c| vec![c]).unwrap_or_default())
    }
}

fn print_state<S: gridboard::SuggestionProvider, C: FrameClassifier>(
    engine: &GridEngine<S, C>,
) {
    println!("  buffer: {:?}", engine.buffer());
    match engine.mode() {
        Mode::Normal => {
            println!("  mode: Normal");
            for (i, group) in CHAR_GROUPS.iter().enumerate() {
                print!("  [{i}] {group}");
                if i % 3 == 2 {
                    println!();
                }
            }
        }
        Mode::GroupSelected(i) => {
            println!("  mode: GroupSelected({i})");
            let cells: Vec<String> = display_layout(i)
                .iter()
                .map(|cell| match cell {
                    LayoutCell::Key(ch) => format!("[{ch}]"),
                    LayoutCell::Spacer => "[ ]".to_string(),
                })
                .collect();
            println!("  keys: {}", cells.join(" "));
            for (k, word) in engine.suggestions().iter().enumerate() {
                println!("  w{k}: {word}");
            }
        }
        Mode::EmojiDraw => println!("  mode: EmojiDraw ({} points)", engine.stroke().len()),
        Mode::EmojiCam => println!("  mode: EmojiCam"),
    }
    println!();
}

fn parse_stroke(input: &str) -> Option<Vec<Point>> {
    let mut points = Vec::new();
    for pair in input.split_whitespace() {
        let (x, y) = pair.split_once(',')?;
        points.push(Point::new(x.parse().ok()?, y.parse().ok()?));
    }
    if points.is_empty() {
        None
    } else {
        Some(points)
    }
}

fn main() {
    let args = Args::parse();

    println!("═══════════════════════════════════════════════════");
    println!("  gridboard - Interactive Grid Keyboard Test");
    println!("═══════════════════════════════════════════════════");
    println!();

    let mut config = GridConfig::default();
    config.suggest_url = args.suggest_url;
    config.suggest_enabled = args.enable_suggest;
    config.suggest_timeout_ms = args.timeout_ms;

    let client = config.suggest_client();
    let keyboard = Keyboard::with_config(config.base());
    let feed = ManualFeed::default();
    let mut engine: GridEngine<_, ManualFeed> = GridEngine::with_keyboard(keyboard, client);

    println!("Commands:");
    println!("  g <0-8>            select a group        c <slot>   pick a character");
    println!("  w <idx>            pick a suggestion     b          cancel the group");
    println!("  del | space        edit the buffer");
    println!("  draw               enter drawing mode    stroke x,y x,y ...  draw + release");
    println!("  cam                enter camera mode     see <label> <conf>  one camera tick");
    println!("  exit               leave draw/cam        show       print state");
    println!("  clear              reset the keyboard");
    println!("Press Ctrl+C to quit.");
    println!();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(raw) => raw,
            Err(e) => {
                eprintln!("Error: {}", e);
                break;
            }
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (cmd, rest) = line.split_once(' ').unwrap_or((line, ""));

        match cmd {
            "g" => {
                match rest.trim().parse::<usize>() {
                    Ok(i) if i < CHAR_GROUPS.len() => {
                        engine.select_group(i);
                    }
                    _ => println!("  → expected a group index 0-8"),
                };
            }
            "c" => match rest.trim().parse::<usize>() {
                Ok(slot) => {
                    engine.select_char(slot);
                }
                Err(_) => println!("  → expected a slot index"),
            },
            "w" => match rest.trim().parse::<usize>() {
                Ok(idx) => {
                    engine.select_suggestion(idx);
                }
                Err(_) => println!("  → expected a suggestion index"),
            },
            "b" => {
                engine.cancel_group();
            }
            "del" => {
                engine.delete_char();
            }
            "space" => {
                engine.add_space();
            }
            "draw" => {
                engine.enter_draw();
            }
            "stroke" => match parse_stroke(rest) {
                Some(points) => {
                    let mut iter = points.into_iter();
                    if let Some(first) = iter.next() {
                        engine.pen_down(first);
                    }
                    for p in iter {
                        engine.pen_move(p);
                    }
                    match engine.finish_stroke() {
                        Some(emoji) => println!("  → {emoji}"),
                        None => println!("  → (no gesture recognized)"),
                    }
                }
                None => println!("  → expected: stroke x,y x,y ..."),
            },
            "cam" => {
                if engine.enter_cam(feed.clone()).is_err() {
                    println!("  → camera only starts from Normal mode");
                }
            }
            "see" => {
                let mut parts = rest.split_whitespace().collect::<Vec<_>>();
                let conf = parts
                    .pop()
                    .and_then(|c| c.parse::<f32>().ok())
                    .unwrap_or(0.0);
                let label = parts.join(" ");
                if label.is_empty() {
                    println!("  → expected: see <label> <confidence>");
                } else {
                    feed.push(&label, conf);
                    match engine.cam_tick() {
                        Some(emoji) => println!("  → {emoji}"),
                        None => println!("  → (not stable yet)"),
                    }
                }
            }
            "exit" => match engine.mode() {
                Mode::EmojiDraw => {
                    engine.exit_draw();
                }
                Mode::EmojiCam => {
                    engine.exit_cam();
                }
                _ => println!("  → nothing to exit"),
            },
            "show" => {}
            "clear" => {
                engine.clear();
            }
            "quit" => break,
            other => println!("  → unknown command: {other}"),
        }

        print_state(&engine);
    }
}
