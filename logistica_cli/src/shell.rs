use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

use logistica_routing::{
    graph::RoadGraph,
    parsers::road_file::save_road_network,
    weather::{Weather, WeatherProfiles, Weight},
};

use crate::commands::{self, ExportFormat, Settings};

const DEFAULT_EXPORT_FILE: &str = "logistica.dot";

enum Flow {
    Continue,
    Exit,
}

/// Menu-driven session over a loaded network. End of input exits like option 8.
pub struct Shell<R, W> {
    graph: RoadGraph,
    settings: Settings,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(graph: RoadGraph, settings: Settings, input: R, output: W) -> Self {
        Shell {
            graph,
            settings,
            input,
            output,
        }
    }

    pub fn into_graph(self) -> RoadGraph {
        self.graph
    }

    pub fn run(&mut self) -> Result<(), anyhow::Error> {
        let summary = self.graph.summary();
        writeln!(
            self.output,
            "Loaded {} cities and {} connections",
            summary.cities, summary.connections
        )?;

        loop {
            self.print_menu()?;

            let Some(option) = self.prompt_option("Select an option: ", 1, 8)? else {
                return Ok(());
            };

            let flow = match option {
                1 => self.shortest_route()?,
                2 => self.graph_center()?,
                3 => self.modify_graph()?,
                4 => self.adjacency_matrix()?,
                5 => self.change_weather()?,
                6 => self.export_dot()?,
                7 => self.save_network()?,
                _ => {
                    writeln!(self.output, "Goodbye")?;
                    Flow::Exit
                }
            };

            if let Flow::Exit = flow {
                return Ok(());
            }
        }
    }

    fn print_menu(&mut self) -> std::io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "=== Main menu ===")?;
        writeln!(self.output, "1. Shortest route between cities")?;
        writeln!(self.output, "2. Graph center")?;
        writeln!(self.output, "3. Modify graph")?;
        writeln!(self.output, "4. Adjacency matrix")?;
        writeln!(
            self.output,
            "5. Change weather (current: {})",
            self.graph.weather()
        )?;
        writeln!(self.output, "6. Export graph to DOT file")?;
        writeln!(self.output, "7. Save network")?;
        writeln!(self.output, "8. Exit")
    }

    /// Reads one trimmed line, `None` at end of input.
    fn prompt(&mut self, prompt: &str) -> std::io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    fn prompt_option(
        &mut self,
        prompt: &str,
        min: usize,
        max: usize,
    ) -> std::io::Result<Option<usize>> {
        loop {
            let Some(line) = self.prompt(prompt)? else {
                return Ok(None);
            };

            match line.parse::<usize>() {
                Ok(option) if (min..=max).contains(&option) => return Ok(Some(option)),
                _ => writeln!(
                    self.output,
                    "Please enter a number between {min} and {max}"
                )?,
            }
        }
    }

    fn prompt_time(&mut self, prompt: &str) -> std::io::Result<Option<Weight>> {
        loop {
            let Some(line) = self.prompt(prompt)? else {
                return Ok(None);
            };

            match line.parse::<Weight>() {
                Ok(time) if time.is_finite() && time >= 0.0 => return Ok(Some(time)),
                _ => writeln!(self.output, "Please enter a non-negative number of hours")?,
            }
        }
    }

    fn prompt_path(&mut self, prompt: &str, default: PathBuf) -> std::io::Result<Option<PathBuf>> {
        let prompt = format!("{prompt} [{}]: ", default.display());

        Ok(self.prompt(&prompt)?.map(|line| {
            if line.is_empty() {
                default
            } else {
                PathBuf::from(line)
            }
        }))
    }

    fn prompt_cities(&mut self) -> std::io::Result<Option<(String, String)>> {
        writeln!(self.output, "Cities: {}", self.graph.cities().join(", "))?;

        let Some(from) = self.prompt("Origin city: ")? else {
            return Ok(None);
        };
        let Some(to) = self.prompt("Destination city: ")? else {
            return Ok(None);
        };

        Ok(Some((from, to)))
    }

    fn report(&mut self, result: Result<(), anyhow::Error>) -> std::io::Result<Flow> {
        if let Err(error) = result {
            writeln!(self.output, "Error: {error:#}")?;
        }

        Ok(Flow::Continue)
    }

    fn shortest_route(&mut self) -> Result<Flow, anyhow::Error> {
        let Some((from, to)) = self.prompt_cities()? else {
            return Ok(Flow::Exit);
        };

        let path = match commands::route(&self.graph, &from, &to, &mut self.output) {
            Ok(path) => path,
            Err(error) => return Ok(self.report(Err(error))?),
        };

        let Some(answer) = self.prompt("Export route to DOT file? (y/n): ")? else {
            return Ok(Flow::Exit);
        };
        if !answer.eq_ignore_ascii_case("y") {
            return Ok(Flow::Continue);
        }

        let Some(output) = self.prompt_path("File", PathBuf::from(DEFAULT_EXPORT_FILE))? else {
            return Ok(Flow::Exit);
        };
        let route = Some((from.as_str(), to.as_str()));
        let result = commands::render_snapshot(&self.graph, ExportFormat::Dot, route)
            .and_then(|content| commands::write_export(&content, &output));
        if result.is_ok() {
            writeln!(
                self.output,
                "Route {} saved to {}",
                path.cities().join(" -> "),
                output.display()
            )?;
        }

        Ok(self.report(result)?)
    }

    fn graph_center(&mut self) -> Result<Flow, anyhow::Error> {
        let result = commands::center(&self.graph, self.settings.max_cities, &mut self.output);
        Ok(self.report(result)?)
    }

    fn modify_graph(&mut self) -> Result<Flow, anyhow::Error> {
        writeln!(self.output, "1. Remove connection (traffic interruption)")?;
        writeln!(self.output, "2. Add or replace connection")?;

        let Some(option) = self.prompt_option("Select an option: ", 1, 2)? else {
            return Ok(Flow::Exit);
        };
        let Some((from, to)) = self.prompt_cities()? else {
            return Ok(Flow::Exit);
        };

        if option == 1 {
            let result = self
                .graph
                .remove_edge(&from, &to)
                .map(|_| ())
                .map_err(anyhow::Error::from);
            if result.is_ok() {
                writeln!(self.output, "Removed connection {from} -> {to}")?;
            }
            return Ok(self.report(result)?);
        }

        let mut times = [0.0; 4];
        for (time, weather) in times.iter_mut().zip(Weather::ALL) {
            let Some(value) = self.prompt_time(&format!("Time under {weather} (hours): "))? else {
                return Ok(Flow::Exit);
            };
            *time = value;
        }

        let [normal, rain, snow, storm] = times;
        let result = self
            .graph
            .add_edge(&from, &to, WeatherProfiles::new(normal, rain, snow, storm))
            .map(|_| ())
            .map_err(anyhow::Error::from);
        if result.is_ok() {
            writeln!(self.output, "Connection {from} -> {to} saved")?;
        }

        Ok(self.report(result)?)
    }

    fn adjacency_matrix(&mut self) -> Result<Flow, anyhow::Error> {
        commands::adjacency(&self.graph, &mut self.output)?;
        Ok(Flow::Continue)
    }

    fn change_weather(&mut self) -> Result<Flow, anyhow::Error> {
        writeln!(self.output, "Current weather: {}", self.graph.weather())?;
        for (index, weather) in Weather::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", index + 1, weather)?;
        }

        let Some(option) = self.prompt_option("Select the weather: ", 1, Weather::ALL.len())? else {
            return Ok(Flow::Exit);
        };

        self.graph.set_weather(Weather::ALL[option - 1]);
        writeln!(self.output, "Weather set to {}", self.graph.weather())?;

        Ok(Flow::Continue)
    }

    fn export_dot(&mut self) -> Result<Flow, anyhow::Error> {
        let Some(output) = self.prompt_path("File", PathBuf::from(DEFAULT_EXPORT_FILE))? else {
            return Ok(Flow::Exit);
        };

        let result = commands::render_snapshot(&self.graph, ExportFormat::Dot, None)
            .and_then(|content| commands::write_export(&content, &output));
        if result.is_ok() {
            writeln!(self.output, "Graph exported to {}", output.display())?;
        }

        Ok(self.report(result)?)
    }

    fn save_network(&mut self) -> Result<Flow, anyhow::Error> {
        let default = self.settings.data_file.clone();
        let Some(output) = self.prompt_path("File", default)? else {
            return Ok(Flow::Exit);
        };

        let result = save_road_network(&self.graph, &output).map_err(anyhow::Error::from);
        if result.is_ok() {
            writeln!(self.output, "Network saved to {}", output.display())?;
        }

        Ok(self.report(result)?)
    }
}
