//! Console rendering of the queue, the reserve and action results

use crate::bag::KindSource;
use crate::game::{ActionReport, Game};
use crate::piece::Piece;
use crate::settings::{DisplaySettings, StackOrder};
use crossterm::style::Stylize;
use std::io::{self, Write};

const BANNER: &str = "===== TETRIS STACK - PIECE MANAGEMENT =====";
const EMPTY_SLOT: &str = "[   ]";

/// Format one piece tag, colored by type when enabled
fn piece_tag(piece: &Piece, display: &DisplaySettings) -> String {
    if display.color {
        piece.to_string().with(piece.piece_type.color()).to_string()
    } else {
        piece.to_string()
    }
}

fn slot_line<'a>(
    pieces: impl Iterator<Item = &'a Piece>,
    free: usize,
    display: &DisplaySettings,
) -> String {
    let mut slots: Vec<String> = pieces.map(|p| piece_tag(p, display)).collect();
    slots.extend(std::iter::repeat_n(EMPTY_SLOT.to_string(), free));
    slots.join(" ")
}

pub fn render_banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", BANNER)
}

/// Print both containers. The queue always reads front-to-back; the reserve
/// direction comes from settings.
pub fn render_state<S: KindSource>(
    out: &mut impl Write,
    game: &Game<S>,
    display: &DisplaySettings,
) -> io::Result<()> {
    let queue = game.queue();
    let reserve = game.reserve();

    writeln!(out)?;
    writeln!(
        out,
        "Queue   (front -> back, {}/{}): {}",
        queue.len(),
        queue.capacity(),
        slot_line(queue.iter(), queue.capacity() - queue.len(), display)
    )?;

    let free = reserve.capacity() - reserve.len();
    let (label, line) = match display.stack_order {
        StackOrder::TopFirst => ("top -> bottom", slot_line(reserve.iter().rev(), free, display)),
        StackOrder::BottomFirst => ("bottom -> top", slot_line(reserve.iter(), free, display)),
    };
    writeln!(
        out,
        "Reserve ({}, {}/{}): {}",
        label,
        reserve.len(),
        reserve.capacity(),
        line
    )
}

/// Print what an action did, or why it was refused
pub fn render_report(
    out: &mut impl Write,
    report: &ActionReport,
    display: &DisplaySettings,
) -> io::Result<()> {
    match &report.outcome {
        Ok(outcome) => writeln!(out, "{}", outcome)?,
        Err(e) => {
            let msg = format!("Cannot do that: {}", e);
            if display.color {
                writeln!(out, "{}", msg.red())?;
            } else {
                writeln!(out, "{}", msg)?;
            }
        }
    }
    if let Some(piece) = &report.refilled {
        writeln!(out, "New piece queued: {}", piece_tag(piece, display))?;
    }
    Ok(())
}
