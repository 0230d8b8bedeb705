mod block;
pub use block::{ClusterBlock, ClusterBlockLevel};

mod custom;
pub use custom::IndexCustom;

pub mod settings;
pub use settings::{Settings, SettingsBuilder};

mod state;
pub use state::IndexState;

/// Map from mapping type name to the raw mapping source.
pub type MappingMap = fnv::FnvHashMap<String, String>;
/// Map from custom metadata type to the opaque metadata.
pub type CustomMap = fnv::FnvHashMap<String, IndexCustom>;
pub type BlockSet = fnv::FnvHashSet<ClusterBlock>;

/// Build a [`MappingMap`] from literal pairs.
#[macro_export]
macro_rules! mappings {
    {
        $( $key:literal : $value:expr  ),* $(,)?
    } => {
        {
            #[allow(unused_mut)]
            let mut map = $crate::data::MappingMap::default();
            $(
                {
                    let key = $key.to_string();
                    map.insert(key, $value.into());
                }

            )*

            map
        }

    };
}
