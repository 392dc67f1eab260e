use crate::player::Player;


pub fn sample_players(usernames: &[&str]) -> Vec<Player> {
    usernames.iter().map(|&username| Player { username: username.to_owned() }).collect()
}
