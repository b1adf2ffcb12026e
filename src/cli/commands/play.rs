//! Play command handler: a line-driven session on the hole diagrams

use caddie::config::Config;
use caddie::core::models::course::find_course;
use caddie::core::models::{Bag, Course, ImagePoint};
use caddie::core::recommend::EmptyBagPolicy;
use caddie::core::round::ImageRound;
use caddie::core::storage::BagRepository;
use caddie::{debug, warn};
use std::io::{self, BufRead, Write};

/// Play `course_name`, reading `tap X Y`, `next`, `prev`, `status` and `quit` from stdin
///
/// # Errors
/// Returns a printable message when the course is unknown or the bag cannot be loaded.
pub fn run(course_name: &str, config: &Config) -> Result<(), String> {
    let courses = Course::samples();
    let course = find_course(&courses, course_name).map_err(|e| format!("✗ {e}"))?;
    let bag = config
        .bag_repository()
        .load()
        .map_err(|e| format!("✗ Failed to load bag: {e}"))?;
    let policy = config.empty_bag_policy();
    let mut round =
        ImageRound::new(course.clone(), config.image_scale()).map_err(|e| format!("✗ {e}"))?;

    println!("{}", round.course().name);
    print_hole(&round);
    prompt();

    for line in io::stdin().lock().lines() {
        let Ok(line) = line else { break };
        let mut words = line.split_whitespace();
        match words.next() {
            Some("tap") => match parse_point(words) {
                Some(point) => {
                    round.register_shot(point);
                    print_status(&round, &bag, policy);
                }
                None => eprintln!("usage: tap X Y   (fractions between 0 and 1)"),
            },
            Some("next") => {
                if round.next_hole() {
                    print_hole(&round);
                } else {
                    println!("Already on the last hole");
                }
            }
            Some("prev") => {
                if round.previous_hole() {
                    print_hole(&round);
                } else {
                    println!("Already on the first hole");
                }
            }
            Some("status") => print_status(&round, &bag, policy),
            Some("quit" | "exit") => break,
            Some(other) => eprintln!("Unknown command '{other}' (tap, next, prev, status, quit)"),
            None => {}
        }
        prompt();
    }
    Ok(())
}

fn parse_point<'a>(mut words: impl Iterator<Item = &'a str>) -> Option<ImagePoint> {
    let x = words.next()?.parse().ok()?;
    let y = words.next()?.parse().ok()?;
    if !(0.0..=1.0).contains(&x) || !(0.0..=1.0).contains(&y) {
        debug!("Tap outside the diagram: ({x}, {y})");
        return None;
    }
    Some(ImagePoint::new(x, y))
}

fn print_hole(round: &ImageRound) {
    let hole = round.hole();
    println!(
        "Hole {}  par {}  {} m",
        hole.number, hole.par, hole.distance
    );
}

fn print_status(round: &ImageRound, bag: &Bag, policy: EmptyBagPolicy) {
    let hole = round.hole();
    if hole.shots.len() == 1 {
        println!("Tee registered");
        return;
    }
    match round.recommendation(bag, policy) {
        Ok(Some(rec)) => {
            println!("Distance to the hole: {:.2} m", rec.distance);
            println!("Recommended club: {}", rec.club);
        }
        Ok(None) => println!("Tap the tee position to start the hole"),
        Err(e) => {
            warn!("No recommendation on hole {}: {e}", hole.number);
            println!("Recommended club: unavailable ({e})");
        }
    }
}

fn prompt() {
    print!("> ");
    io::stdout().flush().ok();
}
