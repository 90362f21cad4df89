//! HUD (render-only): one text block whose content follows the game state.

use bevy::prelude::*;

use crate::common::arena::Side;
use crate::common::state::GameState;
use crate::plugins::rules::{MatchOutcome, MatchSetup};
use crate::plugins::ships::components::Ship;

#[derive(Component)]
pub struct HudText;

const MENU_TEXT: &str = "SPACE DUEL\n\n[1] Human vs AI\n[2] Human vs Human\n[3] AI vs AI";

pub fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_hud)
        .add_systems(Update, update_hud);
}

fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Name::new("Hud"),
        HudText,
        Text::new(MENU_TEXT),
        TextFont {
            font_size: 22.0,
            ..default()
        },
        TextColor(Color::srgb(0.9, 0.9, 0.95)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(16.0),
            top: Val::Px(12.0),
            ..default()
        },
    ));
}

fn health_line(ships: &[&Ship]) -> String {
    [Side::Left, Side::Right]
        .iter()
        .filter_map(|side| ships.iter().find(|s| s.side == *side))
        .map(|s| format!("{}: {:.1} hp  ({} pts)", s.side.label(), s.health.max(0.0), s.score))
        .collect::<Vec<_>>()
        .join("    ")
}

/// The HUD content for one frame.
pub fn hud_text(state: GameState, setup: &MatchSetup, outcome: &MatchOutcome, ships: &[&Ship]) -> String {
    match state {
        GameState::Menu => MENU_TEXT.to_string(),
        GameState::InGame => format!("{}\n{:?}", health_line(ships), setup.mode),
        GameState::GameOver => {
            let headline = match outcome.winner {
                Some(side) => format!("{} wins!", side.label()),
                None => "Draw!".to_string(),
            };
            format!("{headline}\n{}\n\n[R] Rematch   [Esc] Menu", health_line(ships))
        }
    }
}

fn update_hud(
    state: Res<State<GameState>>,
    setup: Res<MatchSetup>,
    outcome: Res<MatchOutcome>,
    q_ships: Query<&Ship>,
    mut q_text: Query<&mut Text, With<HudText>>,
) {
    let Ok(mut text) = q_text.single_mut() else {
        return;
    };
    let ships: Vec<&Ship> = q_ships.iter().collect();
    let content = hud_text(*state.get(), &setup, &outcome, &ships);
    if text.0 != content {
        text.0 = content;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::tunables::Tunables;
    use crate::plugins::rules::GameMode;

    #[test]
    fn game_over_text_names_winner_and_scores() {
        let t = Tunables::default();
        let mut left = Ship::new(Side::Left, &t);
        left.score = 2;
        let mut right = Ship::new(Side::Right, &t);
        right.health = -1.5;

        let outcome = MatchOutcome {
            winner: Some(Side::Left),
            duration: 12.0,
        };
        let setup = MatchSetup {
            mode: GameMode::NoPlayer,
        };
        let s = hud_text(GameState::GameOver, &setup, &outcome, &[&right, &left]);

        assert!(s.starts_with("Yellow wins!"));
        assert!(s.contains("Yellow: 10.0 hp  (2 pts)"));
        assert!(s.contains("Red: 0.0 hp"));
    }

    #[test]
    fn draw_has_no_winner_line() {
        let setup = MatchSetup::default();
        let s = hud_text(GameState::GameOver, &setup, &MatchOutcome::default(), &[]);
        assert!(s.starts_with("Draw!"));
    }
}
