//! End-to-end tests for the patch runner against a synthetic copy of the
//! game socket module.

use std::fs;

use gamesocket_patch::error::PatchError;
use gamesocket_patch::runner::{apply_steps, patch_file};
use tempfile::tempdir;

const FIXTURE: &str = r#"import { GameRoom } from '../models/GameRoom.js'

const activeRooms = new Map()

const DEFAULT_INITIAL_SEATS = 6

// AI action interval - 5 second delay to let players see AI actions clearly
const processAIActions = async (game, roomId, io) => {
  while (game.currentPlayerIsAI()) {
    await new Promise(resolve => setTimeout(resolve, 5000))
    game.applyAIAction()
  }
}

const finishHand = async (game, roomId, io) => {
  const results = game.finishHand()
  setTimeout(() => {
    io.to(roomId).emit('hand_finished', results)
  }, 1000)

        // Check if game is finished
  if (game.gameFinished) {
    console.log(`Game finished in room ${roomId}, winner: ${results.winner.name}`)

    setTimeout(async () => {
      game.startNextHand()
      io.to(roomId).emit('game_started', { continuation: true })
    }, 2500)
  }
}

export const handleSocketConnection = (socket, io) => {
  // Start game
  socket.on('start_game', () => {
    legacyStart(socket, io)
  })

  // Reset game
  socket.on('reset_game', () => {})
}
"#;

#[test]
fn patches_fixture_in_place_and_is_idempotent() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gameSocket.js");
    fs::write(&path, FIXTURE).unwrap();

    let changed = patch_file(&path).unwrap();
    assert!(changed);

    let patched = fs::read_to_string(&path).unwrap();

    // Named constant inserted after the seat-count constant
    assert!(patched
        .contains("const DEFAULT_INITIAL_SEATS = 6\n\nconst AI_ACTION_DELAY_MS = 1000\n\n"));

    // Timer literal and delay expression now use the constant
    assert!(patched.contains("}, AI_ACTION_DELAY_MS)\n\n        // Check if game is finished"));
    assert!(patched.contains("await new Promise(resolve => setTimeout(resolve, AI_ACTION_DELAY_MS))"));

    // Interval comment reworded
    assert!(patched
        .contains("AI action interval - 1 second delay to keep actions readable without dragging on"));

    // Auto-start block gone, including the blank line that preceded it
    assert!(!patched.contains("2500"));
    assert!(patched.contains("awaiting manual restart`)\n  }\n}"));

    // Completion log no longer names a winner
    assert!(!patched.contains("winner: ${results.winner.name}"));

    // Old start_game handler replaced by the rewritten one
    assert!(!patched.contains("legacyStart"));
    assert!(patched.contains("Only the host can start the game"));
    assert!(patched.contains("  })\n\n  // Reset game\n"));

    // Second run finds nothing left to change
    let changed_again = patch_file(&path).unwrap();
    assert!(!changed_again);
    assert_eq!(fs::read_to_string(&path).unwrap(), patched);
}

#[test]
fn leaves_unrelated_files_untouched() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("roomSocket.js");
    let content = "export const handleRoomConnection = (socket, io) => {}\n";
    fs::write(&path, content).unwrap();

    let changed = patch_file(&path).unwrap();
    assert!(!changed);
    assert_eq!(fs::read_to_string(&path).unwrap(), content);
}

#[test]
fn missing_target_is_a_not_found_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.js");

    let err = patch_file(&path).unwrap_err();
    assert!(matches!(err, PatchError::NotFound { .. }));
}

#[test]
fn non_utf8_target_is_an_encoding_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("binary.js");
    fs::write(&path, [0xc3, 0x28, 0xff]).unwrap();

    let err = patch_file(&path).unwrap_err();
    assert!(matches!(err, PatchError::Encoding { .. }));
}

#[test]
fn pipeline_preserves_crlf_documents() {
    let lf = "const DEFAULT_INITIAL_SEATS = 6\n\n  }, 1000)\n\n        // Check if game is finished\n";
    let crlf = lf.replace('\n', "\r\n");

    let patched = apply_steps(&crlf);
    assert!(patched
        .contains("const DEFAULT_INITIAL_SEATS = 6\r\n\r\nconst AI_ACTION_DELAY_MS = 1000\r\n\r\n"));
    assert!(patched.contains("}, AI_ACTION_DELAY_MS)\r\n\r\n        // Check if game is finished"));
    assert!(!patched.replace("\r\n", "").contains('\n'));
}
