use ed25519_dalek::PublicKey;
use model::Snowflake;
use std::env;

pub struct Config {
    pub host: Box<str>,
    pub port: u16,
    pub client_id: Snowflake,
    pub client_secret: Box<str>,
    pub public_key: PublicKey,
}

impl Config {
    pub fn from_envvar() -> Config {
        Config {
            host: Config::get_envvar("HOST").into_boxed_str(),
            port: Config::get_envvar("PORT").parse().unwrap(),
            client_id: Snowflake(Config::get_envvar("CLIENT_ID").parse().unwrap()),
            client_secret: Config::get_envvar("CLIENT_SECRET").into_boxed_str(),
            public_key: Config::read_public_key(),
        }
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn get_envvar(name: &str) -> String {
        let var = env::var(name).expect(&format!("envvar {} was missing!", name)[..]);

        match var.strip_suffix('\r') {
            Some(s) => s.to_owned(),
            None => var,
        }
    }

    fn read_public_key() -> PublicKey {
        let key = Config::get_envvar("PUBLIC_KEY");

        let mut bytes = [0u8; 32];
        hex::decode_to_slice(key, &mut bytes).expect("PUBLIC_KEY was not valid hex");

        PublicKey::from_bytes(&bytes).expect("PUBLIC_KEY was not a valid ed25519 key")
    }
}
