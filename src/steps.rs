//! The ordered edit steps applied to the game socket module.
//!
//! Every step is a pure text-to-text function keyed on exact marker strings
//! found in the target file. A step whose marker is absent returns its input
//! unchanged, so the whole pipeline is safe to re-run on already-patched text.

use lazy_static::lazy_static;
use regex::Regex;

/// Signature shared by all edit steps
pub type EditStep = fn(&str) -> String;

/// Pipeline of edit steps in execution order, with names for logging
pub const STEPS: &[(&str, EditStep)] = &[
    ("insert_constant", insert_constant),
    ("replace_timeout_literal", replace_timeout_literal),
    ("replace_comment", replace_comment),
    ("replace_delay", replace_delay),
    ("remove_auto_start", remove_auto_start),
    ("update_completion_log", update_completion_log),
    ("replace_start_game_handler", replace_start_game_handler),
];

lazy_static! {
    static ref AUTO_START_OPENER: Regex = Regex::new(r"\s*setTimeout\(async \(\) => \{").unwrap();
}

/// Insert the AI delay constant after the seat-count constant.
///
/// Both line-ending conventions are tried since the target file may use
/// either; the inserted lines reuse whichever convention the anchor matched.
pub fn insert_constant(text: &str) -> String {
    if text.contains("const AI_ACTION_DELAY_MS") {
        return text.to_string();
    }

    for nl in ["\r\n", "\n"] {
        let anchor = format!("const DEFAULT_INITIAL_SEATS = 6{nl}{nl}");
        if text.contains(&anchor) {
            let insertion = format!("{anchor}const AI_ACTION_DELAY_MS = 1000{nl}{nl}");
            return text.replacen(&anchor, &insertion, 1);
        }
    }

    text.to_string()
}

/// Swap the hard-coded 1000ms timer argument for the named constant.
///
/// The surrounding comment anchors the match to the one timer this patch
/// targets. Both line-ending variants are attempted unconditionally.
pub fn replace_timeout_literal(text: &str) -> String {
    let mut out = text.to_string();

    for nl in ["\n", "\r\n"] {
        let from = format!("}}, 1000){nl}{nl}        // Check if game is finished");
        let to = format!("}}, AI_ACTION_DELAY_MS){nl}{nl}        // Check if game is finished");
        out = out.replacen(&from, &to, 1);
    }

    out
}

/// Reword the AI action interval comment to match the new 1 second delay
pub fn replace_comment(text: &str) -> String {
    text.replacen(
        "AI action interval - 5 second delay to let players see AI actions clearly",
        "AI action interval - 1 second delay to keep actions readable without dragging on",
        1,
    )
}

/// Replace the literal 5000ms delay expression with the named constant
pub fn replace_delay(text: &str) -> String {
    text.replacen(
        "await new Promise(resolve => setTimeout(resolve, 5000))",
        "await new Promise(resolve => setTimeout(resolve, AI_ACTION_DELAY_MS))",
        1,
    )
}

/// Remove the deferred auto-start block scheduled with a 2500ms delay.
///
/// The opener is located by regex (leading whitespace included), then the
/// block body is delimited by balanced-brace scanning; the brace closing the
/// callback must be immediately followed by `, 2500)`. Only the first such
/// block is removed.
pub fn remove_auto_start(text: &str) -> String {
    for opener in AUTO_START_OPENER.find_iter(text) {
        if let Some(end) = auto_start_block_end(text, opener.end()) {
            let mut out = String::with_capacity(text.len());
            out.push_str(&text[..opener.start()]);
            out.push_str(&text[end..]);
            return out;
        }
    }

    text.to_string()
}

/// Scan forward from just inside the callback's opening brace and return the
/// offset one past the `, 2500)` tail, if the balancing brace carries it.
fn auto_start_block_end(text: &str, body_start: usize) -> Option<usize> {
    const TAIL: &str = ", 2500)";

    let mut depth = 1usize;
    for (i, c) in text[body_start..].char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    let after = body_start + i + 1;
                    return text[after..].starts_with(TAIL).then(|| after + TAIL.len());
                }
            }
            _ => {}
        }
    }

    None
}

/// Replace the hand-completion log line, which named a winner, with one
/// announcing that the game waits for a manual restart
pub fn update_completion_log(text: &str) -> String {
    text.replacen(
        "    console.log(`Game finished in room ${roomId}, winner: ${results.winner.name}`)",
        "    console.log(`Game finished in room ${roomId}, awaiting manual restart`)",
        1,
    )
}

const START_MARKER: &str = "  // Start game";
const END_MARKER: &str = "  // Reset game";

/// Replace everything from the start-game marker up to (not including) the
/// reset-game marker with the rewritten handler
pub fn replace_start_game_handler(text: &str) -> String {
    let start = match text.find(START_MARKER) {
        Some(pos) => pos,
        None => return text.to_string(),
    };
    let end = match text[start..].find(END_MARKER) {
        Some(pos) => start + pos,
        None => return text.to_string(),
    };

    format!("{}{}{}", &text[..start], START_GAME_HANDLER, &text[end..])
}

/// Rewritten start_game handler, spliced in verbatim by
/// [`replace_start_game_handler`]
const START_GAME_HANDLER: &str = r#"  // Start game
  socket.on('start_game', async () => {
    try {
      if (!socket.userId || !socket.currentRoomId) {
        socket.emit('error', { error: 'Invalid game state' })
        return
      }

      const game = activeRooms.get(socket.currentRoomId)
      if (!game) {
        socket.emit('error', { error: 'Game does not exist' })
        return
      }

      const room = await GameRoom.findById(socket.currentRoomId)
      if (room.creator_id !== socket.userId) {
        socket.emit('error', { error: 'Only the host can start the game' })
        return
      }

      let result
      let continued = false

      if (game.gameStarted && game.gameFinished) {
        result = game.startNextHand()
        continued = true
      } else {
        result = game.startGame()
      }

      if (result.success) {
        await GameRoom.updateStatus(socket.currentRoomId, 'playing')
        await GameRoom.updatePlayers(socket.currentRoomId, game.getPlayers())
        await GameRoom.updateGameState(socket.currentRoomId, game.getGameState())

        io.to(socket.currentRoomId).emit('game_started', {
          gameState: game.getGameState(),
          continuation: continued
        })

        await processAIActions(game, socket.currentRoomId, io)

        console.log(`${continued ? 'Next hand' : 'Game'} started in room ${socket.currentRoomId}`)
      } else {
        socket.emit('error', { error: result.error })
      }

    } catch (error) {
      console.error('Start game error:', error)
      socket.emit('error', { error: 'Failed to start game' })
    }
  })

"#;
