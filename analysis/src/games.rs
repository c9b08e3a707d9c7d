use std::collections::{BTreeMap, HashMap, HashSet};
use std::io::BufRead;

const INIT_EVENT: &str = "InitGame";
const PLAYER_EVENT: &str = "ClientUserinfoChanged";
const KILL_EVENT: &str = "Kill:";

const WORLD: &str = "<world>";

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Game {
    pub id: u32,
    pub total_kills: u64,
    pub players: Vec<String>,
    pub kills: BTreeMap<String, i64>,
}

pub fn parse_file<P>(path: P) -> std::io::Result<Vec<Game>>
where
    P: AsRef<std::path::Path>,
{
    let file = std::fs::File::open(path)?;
    parse(file)
}

pub fn parse<R>(source: R) -> std::io::Result<Vec<Game>>
where
    R: std::io::Read,
{
    let mut reader = std::io::BufReader::new(source);

    let mut games: Vec<Game> = Vec::new();

    let mut game_id = 0_u32;
    let mut game_active = false;
    let mut players: HashSet<String> = HashSet::new();
    let mut kills: HashMap<String, i64> = HashMap::new();
    let mut total_kills = 0_u64;

    let mut raw_line = Vec::new();
    loop {
        raw_line.clear();
        if reader.read_until(b'\n', &mut raw_line)? == 0 {
            break;
        }

        let decoded = decode_dropping_invalid(&raw_line);
        let line = decoded.trim();
        if line.is_empty() {
            continue;
        }

        if line.contains(INIT_EVENT) {
            if game_active {
                games.push(build_game(game_id, total_kills, &players, &kills));
                players.clear();
                kills.clear();
                total_kills = 0;
            }
            game_id += 1;
            game_active = true;
            continue;
        }

        if line.contains(PLAYER_EVENT) {
            match parse_userinfo(line) {
                Some(name) => {
                    players.insert(name.to_owned());
                    kills.entry(name.to_owned()).or_insert(0);
                }
                None => {
                    tracing::trace!("Userinfo line without a name field: {:?}", line);
                }
            };
            continue;
        }

        if line.contains(KILL_EVENT) {
            total_kills += 1;
            match parse_kill(line) {
                Some((killer, victim)) if killer == WORLD => {
                    *kills.entry(victim.to_owned()).or_insert(0) -= 1;
                }
                Some((killer, _)) => {
                    *kills.entry(killer.to_owned()).or_insert(0) += 1;
                }
                None => {
                    // Still counted in total_kills above.
                    tracing::trace!("Kill line without parseable actors: {:?}", line);
                }
            };
            continue;
        }
    }

    if game_active {
        games.push(build_game(game_id, total_kills, &players, &kills));
    }

    Ok(games)
}

fn build_game(
    id: u32,
    total_kills: u64,
    players: &HashSet<String>,
    kills: &HashMap<String, i64>,
) -> Game {
    let mut ordered: Vec<String> = players.iter().cloned().collect();
    ordered.sort();

    // Scores of never-identified actors (e.g. a world-kill victim that had no
    // userinfo line) are dropped here: the kills map covers exactly `players`.
    let filtered = ordered
        .iter()
        .map(|name| (name.clone(), kills.get(name).copied().unwrap_or(0)))
        .collect();

    Game {
        id,
        total_kills,
        players: ordered,
        kills: filtered,
    }
}

fn decode_dropping_invalid(raw: &[u8]) -> std::borrow::Cow<'_, str> {
    match std::str::from_utf8(raw) {
        Ok(text) => std::borrow::Cow::Borrowed(text),
        Err(_) => {
            let mut cleaned = String::with_capacity(raw.len());
            for chunk in raw.utf8_chunks() {
                cleaned.push_str(chunk.valid());
            }
            std::borrow::Cow::Owned(cleaned)
        }
    }
}

fn parse_userinfo(line: &str) -> Option<&str> {
    for (start, _) in line.match_indices("ClientUserinfoChanged: ") {
        let rest = &line[start + "ClientUserinfoChanged: ".len()..];
        let Some((client_id, rest)) = rest.split_once(" n\\") else {
            continue;
        };
        if client_id.is_empty() || !client_id.bytes().all(|b| b.is_ascii_digit()) {
            continue;
        }

        // The name runs until the next field separator, which may be missing
        // on a truncated line.
        let name = match rest.split_once('\\') {
            Some((name, _)) => name,
            None => rest,
        };
        if !name.is_empty() {
            return Some(name);
        }
    }

    None
}

fn parse_kill(line: &str) -> Option<(&str, &str)> {
    // The marker sits behind a timestamp prefix; try every candidate position
    // until one carries the full `<num> <num> <num>: .. killed .. by ..` shape.
    for (start, _) in line.match_indices("Kill: ") {
        let rest = &line[start + "Kill: ".len()..];
        let Some((ids, detail)) = rest.split_once(": ") else {
            continue;
        };
        if !is_kill_id_triple(ids) {
            continue;
        }
        if let Some(actors) = split_kill_actors(detail) {
            return Some(actors);
        }
    }

    None
}

fn is_kill_id_triple(ids: &str) -> bool {
    let mut fields = 0;
    for part in ids.split(' ') {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        fields += 1;
    }
    fields == 3
}

// Names may themselves contain ` killed ` or ` by `; the rightmost split that
// still leaves a victim and a cause wins, same as a greedy backtracking match.
fn split_kill_actors(detail: &str) -> Option<(&str, &str)> {
    for (idx, _) in detail.rmatch_indices(" killed ") {
        let killer = &detail[..idx];
        if killer.is_empty() {
            continue;
        }

        let tail = &detail[idx + " killed ".len()..];
        for (by_idx, _) in tail.rmatch_indices(" by ") {
            let victim = &tail[..by_idx];
            let cause = &tail[by_idx + " by ".len()..];
            if !victim.is_empty() && !cause.is_empty() {
                return Some((killer, victim));
            }
        }
    }

    None
}
