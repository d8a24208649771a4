use anyhow::{
    Context,
    Error,
};
use assets::{
    BARRAGE_CLASS_MAP_PATH,
    BLOCK_CLASS_LIST_PATH,
    CONFIG_PATH,
    SCENARIO_PATH,
};
use barrage_common::load_data_file;
use class_kind::BarrageFactory;
use component::barrage_class::{
    BarrageClassComponent,
    BarrageClassDescriptor,
};
use config::Config;
use scenario::ScenarioDescriptor;
use server_loop::ServerLoop;
use std::{
    collections::BTreeMap,
    sync::Arc,
};
use tokio::runtime;
use world::{
    BlockClassDescriptor,
    BlockClasses,
};

mod assets;
mod class_kind;
mod component;
mod config;
mod entity;
mod resource;
mod scenario;
mod server_loop;
mod system;
mod world;

fn main() -> Result<(), Error> {
    env_logger::init();

    let rt = runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("unable to start the runtime")?;

    rt.block_on(async {
        let config = load_data_file::<Config>(CONFIG_PATH).await?;

        let block_classes =
            load_data_file::<Vec<BlockClassDescriptor>>(BLOCK_CLASS_LIST_PATH).await?;

        let barrage_classes =
            load_data_file::<BTreeMap<String, BarrageClassDescriptor>>(BARRAGE_CLASS_MAP_PATH)
                .await?;

        let scenario = load_data_file::<ScenarioDescriptor>(SCENARIO_PATH).await?;

        let barrage_classes = Arc::new(
            BarrageClassComponent::describe(&barrage_classes)
                .context("unable to load barrage classes")?,
        );

        let scenario = scenario
            .describe(
                config.dimension,
                BlockClasses::describe(&block_classes),
                barrage_classes.label_map(),
            )
            .context("unable to load the scenario")?;

        let (event_tx, event_rx) = flume::unbounded();

        ServerLoop::new(
            config,
            scenario,
            BarrageFactory::new(barrage_classes, event_tx),
            event_rx,
        )
        .run()
        .await?;

        Ok(())
    })
}
