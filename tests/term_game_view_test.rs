use blockfall::core::{GameState, Grid};
use blockfall::term::game_view::BACKGROUND;
use blockfall::term::{AnchorY, GameView, Viewport};
use blockfall::types::{Mode, Rgb};

fn screen_text(fb: &blockfall::term::FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1 the board is 20x20, plus border => 22x22.
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_idle_shows_start_prompt() {
    let snap = GameState::new(1).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(22, 22));
    let text = screen_text(&fb);

    assert!(text.contains("Click to Start"));
    assert!(!text.contains("Score:"));
}

#[test]
fn term_view_running_shows_score_and_piece() {
    let mut game = GameState::new(1);
    game.start();
    let snap = game.snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    assert!(fb.row_text(1).contains("Score: 0"));

    // Active piece cells land inside the border, two columns per cell.
    let active = snap.active.unwrap();
    for (x, y) in active.cells() {
        let px = 1 + x as u16 * 2;
        let py = 1 + y as u16;
        if py == 1 {
            // Row 0 is partly covered by the score text.
            continue;
        }
        let cell = fb.get(px, py).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, active.color);
    }
}

#[test]
fn term_view_renders_settled_cell_as_two_chars_wide() {
    let red = Rgb::new(255, 0, 0);
    let mut grid = Grid::new();
    grid.set(0, 19, Some(red));

    let mut game = GameState::new(1);
    game.start_with_grid(grid);
    let fb = GameView::default().render(&game.snapshot(), Viewport::new(22, 22));

    let y0 = 1 + 19;
    for x in [1, 2] {
        let cell = fb.get(x, y0).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, red);
        assert_eq!(cell.style.bg, BACKGROUND);
    }
    assert_eq!(fb.get(3, y0).unwrap().ch, '·');
}

#[test]
fn term_view_game_over_hides_grid() {
    let mut rows = vec!["..########"];
    rows.extend(std::iter::repeat("..........").take(19));
    let mut game = GameState::new(1);
    game.start_with_grid(Grid::from_ascii(&rows, Rgb::new(9, 9, 9)));
    assert_eq!(game.mode(), Mode::GameOver);

    let fb = GameView::default().render(&game.snapshot(), Viewport::new(22, 22));
    let text = screen_text(&fb);

    assert!(text.contains("Game Over"));
    assert!(text.contains("Score: 0"));
    assert!(!text.contains('█'));
    assert!(!text.contains('·'));
}

#[test]
fn term_view_side_panel_shows_counters() {
    let mut game = GameState::new(1);
    game.start();
    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&game.snapshot(), Viewport::new(60, 22));

    assert!(fb.row_text(0).contains("SCORE"));
    assert!(fb.row_text(3).contains("LINES"));
    assert!(fb.row_text(6).contains("PIECES"));
    assert!(fb.row_text(7).contains('1'));
}

#[test]
fn term_view_click_hit_test_follows_frame() {
    let view = GameView::default();
    let vp = Viewport::new(42, 30);
    assert!(view.board_contains(vp, 10, 4));
    assert!(view.board_contains(vp, 20, 15));
    assert!(!view.board_contains(vp, 0, 0));
    assert!(!view.board_contains(vp, 32, 15));
}
