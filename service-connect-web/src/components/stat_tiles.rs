use crate::components::foundation as f;
use service_connect_core::catalog::StatTile;

#[derive(f::Properties, PartialEq, Clone)]
pub struct StatTilesProps {
    pub tiles: Vec<StatTile>,
    #[prop_or_default]
    pub class: f::Classes,
}

#[f::function_component(StatTiles)]
pub fn stat_tiles(props: &StatTilesProps) -> f::Html {
    let class = f::class_list(&["grid", "grid-cols-2", "gap-3"], &props.class);
    f::html! {
        <div {class}>
            { for props.tiles.iter().map(|tile| f::html! {
                <div class="stat bg-base-100 rounded-box shadow-sm p-3">
                    <div class="stat-title text-xs">{ tile.label.clone() }</div>
                    <div class="stat-value text-xl">{ tile.value.clone() }</div>
                    if let Some(change) = &tile.change {
                        <div class="stat-desc text-success">{ change.clone() }</div>
                    }
                </div>
            }) }
        </div>
    }
}
