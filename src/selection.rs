use crate::enums::{Position, SkillName};
use crate::player::Player;

/// Pick the best candidate for a slot on the team.
///
/// Eligible players play `position`, list `skill`, and are not named in
/// `excluded` (exact, case-sensitive match). The highest level for `skill`
/// wins, read from the player's first entry for it. Ties go to whoever comes
/// first in `players`.
pub fn select_best<'a>(
    players: &'a [Player],
    position: Position,
    skill: SkillName,
    excluded: &[String],
) -> Option<&'a Player> {
    players
        .iter()
        .filter(|player| player.position == position)
        .filter_map(|player| player.skill_level(skill).map(|level| (player, level)))
        .filter(|(player, _)| !excluded.iter().any(|name| name == &player.name))
        // max_by_key keeps the last maximum, so walk backwards to keep the earliest.
        .rev()
        .max_by_key(|(_, level)| *level)
        .map(|(player, _)| player)
}
