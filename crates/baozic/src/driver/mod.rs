//! Compilation driver and pipeline orchestration

use log::debug;

use crate::ast::Program;
use crate::common::{AnalysisResult, DiagnosticReporter};
use crate::frontend::{SourceUnit, analyze};
use crate::opt::optimize;

/// Configuration for a pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileConfig {
    /// Run the optimizer after analysis
    pub optimize: bool,
    /// Log the typed AST at debug level
    pub dump_typed_ast: bool,
    /// Log the optimized AST at debug level
    pub dump_optimized_ast: bool,
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self {
            optimize: true,
            dump_typed_ast: false,
            dump_optimized_ast: false,
        }
    }
}

/// Analysis followed by optional optimization
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: CompileConfig,
}

impl Pipeline {
    pub fn new(config: CompileConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CompileConfig {
        &self.config
    }

    /// Analyze a unit and, if enabled, optimize the result
    pub fn run(&self, unit: &SourceUnit) -> AnalysisResult<Program> {
        let program = analyze(unit)?;
        debug!("analysis produced {} statements", program.statements.len());
        if self.config.dump_typed_ast {
            debug!("typed AST:\n{:#?}", program);
        }

        if !self.config.optimize {
            return Ok(program);
        }

        let program = optimize(program);
        debug!("optimization left {} statements", program.statements.len());
        if self.config.dump_optimized_ast {
            debug!("optimized AST:\n{:#?}", program);
        }
        Ok(program)
    }

    /// Like `run`, but also prints any error through the reporter
    pub fn run_reported(
        &self,
        unit: &SourceUnit,
        reporter: &DiagnosticReporter,
        file_id: usize,
    ) -> AnalysisResult<Program> {
        match self.run(unit) {
            Ok(program) => Ok(program),
            Err(e) => {
                reporter.report_error(file_id, &e);
                Err(e)
            }
        }
    }
}
