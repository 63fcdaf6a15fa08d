//! Startup configuration
//!
//! Parsed once from the command line and immutable afterwards. The pack
//! has no CLI framework anywhere, so this is a small hand loop over the
//! argument list; speeds and dimensions must be positive integers.

/// Immutable startup configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Court width in pixels
    pub width: u32,
    /// Court height in pixels
    pub height: u32,
    /// Player paddle displacement per tick
    pub player_speed: u32,
    /// Opponent paddle displacement per tick
    pub enemy_speed: u32,
    /// Ball displacement per tick
    pub ball_speed: u32,
    /// Re-serve from center court after each point
    pub respawn_on_score: bool,
    /// Fixed serve RNG seed; clock-derived when absent
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 200,
            height: 200,
            player_speed: 4,
            enemy_speed: 4,
            ball_speed: 4,
            respawn_on_score: false,
            seed: None,
        }
    }
}

/// What the command line asked for
#[derive(Debug)]
pub enum Command {
    Run(Config),
    Help,
}

impl Config {
    /// Parse program arguments (without the program name). Accepts both
    /// `--flag value` and `--flag=value`.
    pub fn parse<I>(args: I) -> Result<Command, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Config::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let (flag, inline) = match arg.split_once('=') {
                Some((f, v)) => (f.to_string(), Some(v.to_string())),
                None => (arg, None),
            };
            match flag.as_str() {
                "--help" | "-h" => return Ok(Command::Help),
                "--respawn" => config.respawn_on_score = true,
                "--width" => config.width = positive(&flag, &value(&flag, inline, &mut args)?)?,
                "--height" => config.height = positive(&flag, &value(&flag, inline, &mut args)?)?,
                "--player-speed" => {
                    config.player_speed = positive(&flag, &value(&flag, inline, &mut args)?)?;
                }
                "--enemy-speed" => {
                    config.enemy_speed = positive(&flag, &value(&flag, inline, &mut args)?)?;
                }
                "--ball-speed" => {
                    config.ball_speed = positive(&flag, &value(&flag, inline, &mut args)?)?;
                }
                "--seed" => {
                    let raw = value(&flag, inline, &mut args)?;
                    let seed = raw
                        .parse::<u64>()
                        .map_err(|_| format!("{flag} expects an integer, got '{raw}'"))?;
                    config.seed = Some(seed);
                }
                _ => return Err(format!("unknown option: {flag}")),
            }
        }

        Ok(Command::Run(config))
    }

    pub fn usage() -> &'static str {
        "Usage: pongo [options]\n\
         \n\
         Options:\n\
         \x20 --width N         Width of the court (default 200)\n\
         \x20 --height N        Height of the court (default 200)\n\
         \x20 --player-speed N  Speed of the player paddle (default 4)\n\
         \x20 --enemy-speed N   Speed of the enemy paddle (default 4)\n\
         \x20 --ball-speed N    Speed of the ball (default 4)\n\
         \x20 --respawn         Re-serve from center court after each point\n\
         \x20 --seed N          Fixed serve RNG seed\n\
         \x20 -h, --help        Show this help and exit\n\
         \n\
         Keys: j paddle down, k paddle up, p pause, q quit\n"
    }
}

fn value<I>(flag: &str, inline: Option<String>, args: &mut I) -> Result<String, String>
where
    I: Iterator<Item = String>,
{
    inline
        .or_else(|| args.next())
        .ok_or_else(|| format!("{flag} requires a value"))
}

fn positive(flag: &str, raw: &str) -> Result<u32, String> {
    raw.parse::<u32>()
        .ok()
        .filter(|v| *v > 0)
        .ok_or_else(|| format!("{flag} expects a positive integer, got '{raw}'"))
}
