use nameserver_sort_application::ports::ResultWriter;
use nameserver_sort_application::use_cases::{
    ProbeEngine, RankNameserversUseCase, WriteResultsUseCase,
};
use nameserver_sort_domain::Config;
use nameserver_sort_infrastructure::output::{
    BindForwardersWriter, CsvResultWriter, JsonResultWriter,
};
use nameserver_sort_infrastructure::probe::create_transport;
use nameserver_sort_infrastructure::source::PublicDnsInfoSource;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

pub struct UseCases {
    pub rank_nameservers: Arc<RankNameserversUseCase>,
    pub write_results: Arc<WriteResultsUseCase>,
}

impl UseCases {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let source = Arc::new(PublicDnsInfoSource::new(
            &config.source.base_url,
            Duration::from_secs(config.source.fetch_timeout_secs),
        )?);

        let transport = create_transport(&config.probe);
        let mut engine = ProbeEngine::new(transport);
        if let Some(limit) = config.probe.max_in_flight {
            engine = engine.with_max_in_flight(limit);
        }

        Ok(Self {
            rank_nameservers: Arc::new(RankNameserversUseCase::new(source, engine)),
            write_results: Arc::new(WriteResultsUseCase::new(writers(config))),
        })
    }
}

fn writers(config: &Config) -> Vec<Arc<dyn ResultWriter>> {
    let directory = config.output.directory.as_path();
    let stem = config.output_stem();
    let mut writers: Vec<Arc<dyn ResultWriter>> = Vec::new();

    if config.output.json {
        writers.push(Arc::new(JsonResultWriter::new(directory, &stem)));
    }
    if config.output.csv {
        writers.push(Arc::new(CsvResultWriter::new(directory, &stem)));
    }
    if config.output.bind {
        writers.push(Arc::new(BindForwardersWriter::new(directory)));
    }

    debug!(
        directory = %directory.display(),
        stem = %stem,
        writers = writers.len(),
        "Output writers configured"
    );
    writers
}
