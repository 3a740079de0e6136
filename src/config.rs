use serde::{Deserialize, Serialize};
use std::fs;
use toml;

pub const CONF_FILE: &str = "sqlaunch.toml";

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct ArgCnf
{
    pub jvm:            Option<Vec<String>>,
}

impl Default for ArgCnf
{
    fn default() -> Self
    {
        Self
        {
            jvm:        None,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct Config
{
    pub entry_point:    String,
    pub classpath:      Vec<String>,
    pub jdk_home:       Option<String>,
    pub graal:          Option<bool>,
    pub log_level:      u8,
    pub args:           ArgCnf,
}

impl Default for Config
{
    fn default() -> Self
    {
        Config
        {
            entry_point:    "de.hpi.swa.trufflesqueak.TruffleSqueakMain".to_string(),
            classpath:      vec!["bin".to_string(), "lib/*".to_string()],
            jdk_home:       None,
            graal:          None,
            log_level:      0,
            args:           ArgCnf::default(),
        }
    }
}

impl Config
{
    #[inline(always)]
    pub fn load() -> Result<Self, Box<dyn std::error::Error>>
    {
        let content: String = fs::read_to_string(CONF_FILE)?;
        let conf: Config = toml::from_str(&content)?;
        Ok(conf)
    }
    #[inline(always)]
    pub fn write(&self) -> Result<(), Box<dyn std::error::Error>>
    {
        fs::write(CONF_FILE, toml::to_string(&self)?)?;
        Ok(())
    }
}
