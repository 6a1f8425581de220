use std::io;

use serde::{Deserialize, Serialize};
use serde_json::json;
use serde_json::ser::{Formatter, Serializer};

use crate::compound;
use crate::error::{Error, Result};
use crate::{Compound, Value};

/// Settings for a new world, usually read from a JSON config file.
///
/// Every field except `seed` and `experiments` is required when deserializing.
/// A missing or null seed becomes 0.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GameSettings {
    pub enable_cheats: bool,
    pub keep_inventory: bool,
    pub command_blocks_enabled: bool,
    pub do_daylight_cycle: bool,
    pub do_entity_drops: bool,
    pub do_fire_tick: bool,
    pub do_immediate_respawn: bool,
    pub do_mob_loot: bool,
    pub do_mob_spawning: bool,
    pub do_tile_drops: bool,
    pub do_weather_cycle: bool,
    pub mob_griefing: bool,
    pub natural_regeneration: bool,
    pub pvp: bool,
    pub show_coordinates: bool,
    pub tnt_explodes: bool,

    /// 0 peaceful, 1 easy, 2 normal, 3 hard.
    pub difficulty: i64,
    /// 0 survival, 1 creative, 2 adventure.
    pub default_game_mode: i64,
    /// 0 old limited world, 1 infinite, 2 flat.
    pub world_type: i64,
    pub server_chunk_tick_range: i64,
    pub spawn_radius: i64,

    pub seed: Option<i64>,
    pub level_name: String,

    #[serde(default, alias = "experiment_options")]
    pub experiments: Experiments,
}

/// Experimental gameplay toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Experiments {
    pub data_driven_biomes: bool,
    pub data_driven_items: bool,
    pub experimental_molang_features: bool,
}

impl Experiments {
    fn any(&self) -> bool {
        self.data_driven_biomes || self.data_driven_items || self.experimental_molang_features
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            enable_cheats: true,
            keep_inventory: true,
            command_blocks_enabled: true,
            do_daylight_cycle: true,
            do_entity_drops: true,
            do_fire_tick: true,
            do_immediate_respawn: false,
            do_mob_loot: true,
            do_mob_spawning: true,
            do_tile_drops: true,
            do_weather_cycle: true,
            mob_griefing: true,
            natural_regeneration: true,
            pvp: true,
            show_coordinates: false,
            tnt_explodes: true,
            difficulty: 2,
            default_game_mode: 1,
            world_type: 1,
            server_chunk_tick_range: 4,
            spawn_radius: 10,
            seed: None,
            level_name: "World".to_owned(),
            experiments: Experiments::default(),
        }
    }
}

fn int_field(name: &str, v: i64) -> Result<Value> {
    Value::int(v).map_err(|e| e.context(name))
}

/// JSON layout the game writes for embedded JSON text: every member and
/// element on its own line, no indentation, no space after `:`.
#[derive(Default)]
struct LineFormatter {
    has_value: bool,
}

impl LineFormatter {
    fn begin_entry<W: ?Sized + io::Write>(w: &mut W, first: bool) -> io::Result<()> {
        let sep: &[u8] = if first { b"\n" } else { b",\n" };
        w.write_all(sep)
    }

    fn end_nested<W: ?Sized + io::Write>(&mut self, w: &mut W, close: &[u8]) -> io::Result<()> {
        if self.has_value {
            w.write_all(b"\n")?;
        }
        w.write_all(close)
    }
}

impl Formatter for LineFormatter {
    fn begin_array<W: ?Sized + io::Write>(&mut self, w: &mut W) -> io::Result<()> {
        self.has_value = false;
        w.write_all(b"[")
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, w: &mut W) -> io::Result<()> {
        self.end_nested(w, b"]")
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        w: &mut W,
        first: bool,
    ) -> io::Result<()> {
        Self::begin_entry(w, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, _w: &mut W) -> io::Result<()> {
        self.has_value = true;
        Ok(())
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, w: &mut W) -> io::Result<()> {
        self.has_value = false;
        w.write_all(b"{")
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, w: &mut W) -> io::Result<()> {
        self.end_nested(w, b"}")
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        w: &mut W,
        first: bool,
    ) -> io::Result<()> {
        Self::begin_entry(w, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, w: &mut W) -> io::Result<()> {
        w.write_all(b":")
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, _w: &mut W) -> io::Result<()> {
        self.has_value = true;
        Ok(())
    }
}

/// Layers of the default flat world, stored as JSON text in the level.
fn flat_world_layers() -> Result<String> {
    let layers = json!({
        "biome_id": 1,
        "block_layers": [
            { "block_data": 0, "block_id": 7, "count": 1 },
            { "block_data": 0, "block_id": 3, "count": 2 },
            { "block_data": 0, "block_id": 2, "count": 1 },
        ],
        "encoding_version": 3,
        "structure_options": null,
    });

    let mut out = Vec::new();
    let mut ser = Serializer::with_formatter(&mut out, LineFormatter::default());
    layers.serialize(&mut ser).map_err(io::Error::from)?;

    String::from_utf8(out).map_err(|e| Error::nonunicode_string(e.as_bytes(), 0))
}

/// Build the level compound the game expects for a new world.
///
/// The names, types and order of the entries are what the game reads, so
/// they are fixed here. Integer settings that do not fit in an Int give a
/// range error naming the setting.
pub fn build_level_compound(settings: &GameSettings) -> Result<Compound> {
    let s = settings;
    let exp = &s.experiments;

    let abilities = compound! {
        "attackmobs" => 0_i8,
        "attackplayers" => 0_i8,
        "build" => 1_i8,
        "doorsandswitches" => 0_i8,
        "flying" => 0_i8,
        "instabuild" => 0_i8,
        "invulnerable" => 0_i8,
        "lightning" => 0_i8,
        "mayfly" => 0_i8,
        "mine" => 1_i8,
        "mute" => 0_i8,
        "noclip" => 0_i8,
        "op" => 0_i8,
        "opencontainers" => 0_i8,
        "teleport" => 0_i8,
    }?;

    let experiments = compound! {
        "data_driven_biomes" => exp.data_driven_biomes,
        "data_driven_items" => exp.data_driven_items,
        "experimental_molang_features" => exp.experimental_molang_features,
        "experiments_ever_used" => exp.any(),
        "gametest" => 0_i8,
        "saved_with_toggled_experiments" => exp.any(),
        "upcoming_creator_features" => 0_i8,
    }?;

    compound! {
        "abilities" => abilities,
        "permissionsLevel" => 0,
        "playerPermissionsLevel" => 1,
        "flySpeed" => 0.05_f32,
        "walkSpeed" => 0.1_f32,
        "allowdestructiveobjects" => 0_i8,
        "allowmobs" => 1_i8,
        "bonusChestEnabled" => 0_i8,
        "bonusChestSpawned" => 0_i8,
        "CenterMapsToOrigin" => 0_i8,
        "cheatsEnabled" => s.enable_cheats,
        "codebuilder" => 0_i8,
        "commandblockoutput" => 1_i8,
        "commandblocksenabled" => s.command_blocks_enabled,
        "commandsEnabled" => 0_i8,
        "ConfirmedPlatformLockedContent" => 0_i8,
        "dodaylightcycle" => s.do_daylight_cycle,
        // Misspelt in the game itself.
        "doentitiydrops" => s.do_entity_drops,
        "dofiretick" => s.do_fire_tick,
        "doimmediaterespawn" => s.do_immediate_respawn,
        "doinsomnia" => 1_i8,
        "domobloot" => s.do_mob_loot,
        "domobspawning" => s.do_mob_spawning,
        "dotiledrops" => s.do_tile_drops,
        "doweathercycle" => s.do_weather_cycle,
        "drowningdamage" => 1_i8,
        "educationFeaturesEnabled" => 0_i8,
        "experimentalgameplay" => exp.any(),
        "experiments" => experiments,
        "falldamage" => 1_i8,
        "firedamage" => 1_i8,
        "freezedamage" => 1_i8,
        "ForceGameType" => 0_i8,
        "globalmute" => 0_i8,
        "hasBeenLoadedInCreative" => 0_i8,
        "hasLockedBehaviorPack" => 0_i8,
        "hasLockedResourcePack" => 0_i8,
        "immutableWorld" => 0_i8,
        "isFromLockedTemplate" => 0_i8,
        "isFromWorldTemplate" => 0_i8,
        "isSingleUseWorld" => 0_i8,
        "isWorldTemplateOptionLocked" => 0_i8,
        "keepinventory" => s.keep_inventory,
        "LANBroadcast" => 1_i8,
        "LANBroadcastIntent" => 1_i8,
        "mobgriefing" => s.mob_griefing,
        "MultiplayerGame" => 1_i8,
        "MultiplayerGameIntent" => 1_i8,
        "naturalregeneration" => s.natural_regeneration,
        "pvp" => s.pvp,
        "requiresCopiedPackRemovalCheck" => 0_i8,
        "sendcommandfeedback" => 1_i8,
        "showcoordinates" => s.show_coordinates,
        "showdeathmessages" => 1_i8,
        "showtags" => 1_i8,
        "spawnMobs" => 1_i8,
        "SpawnV1Villagers" => 0_i8,
        "startWithMapEnabled" => 0_i8,
        "texturePacksRequired" => 0_i8,
        "tntexplodes" => s.tnt_explodes,
        "useMsaGamertagsOnly" => 0_i8,
        "Difficulty" => int_field("difficulty", s.difficulty)?,
        "eduOffer" => 0,
        "functioncommandlimit" => 10000,
        "GameType" => int_field("default_game_mode", s.default_game_mode)?,
        "Generator" => int_field("world_type", s.world_type)?,
        "lightningTime" => 0,
        "LimitedWorldOriginX" => 0,
        "LimitedWorldOriginY" => 0,
        "LimitedWorldOriginZ" => 0,
        "maxcommandchainlength" => 65535,
        "NetherScale" => 8,
        "NetworkVersion" => 686,
        "Platform" => 2,
        "PlatformBroadcastIntent" => 3,
        "rainTime" => 0,
        "randomtickspeed" => 1,
        "serverChunkTickRange" => int_field("server_chunk_tick_range", s.server_chunk_tick_range)?,
        "spawnradius" => int_field("spawn_radius", s.spawn_radius)?,
        "SpawnX" => 0,
        "SpawnY" => 64,
        "SpawnZ" => 0,
        "StorageVersion" => 8,
        "XBLBroadcastIntent" => 3,
        "currentTick" => 0_i64,
        "LastPlayed" => 0_i64,
        "RandomSeed" => s.seed.unwrap_or(0),
        "Time" => 0_i64,
        "worldStartCount" => 0_i64,
        "lightningLevel" => 0.0_f32,
        "rainLevel" => 0.0_f32,
        "baseGameVersion" => "*",
        "BiomeOverride" => "",
        "FlatWorldLayers" => flat_world_layers()?,
        "InventoryVersion" => "",
        "LevelName" => Value::string(s.level_name.as_str()).map_err(|e| e.context("level_name"))?,
        "prid" => "",
        "worldTemplateUUID" => "",
        "worldTemplateVersion" => "",
        "world_policies" => Compound::new(),
    }
}
