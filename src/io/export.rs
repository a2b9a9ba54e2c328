//! Plain-text dump of an ensemble.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::ensemble::Ensemble;

/// A `# generation <g> trigger <t> paths <n>` header, then one line per
/// trajectory: `index action re im |a| arg x0 x1 ... xN`.
pub fn write_ensemble_to<W: Write>(writer: &mut W, ensemble: &Ensemble) -> io::Result<()> {
    writeln!(
        writer,
        "# generation {} trigger {:?} paths {}",
        ensemble.generation(),
        ensemble.trigger(),
        ensemble.len()
    )?;
    for (i, t) in ensemble.iter().enumerate() {
        let a = t.amplitude();
        write!(writer, "{} {} {} {} {} {}", i, t.action(), a.re, a.im, a.norm(), a.arg())?;
        for x in t.positions() {
            write!(writer, " {}", x)?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

pub fn write_ensemble<P: AsRef<Path>>(filename: P, ensemble: &Ensemble) -> io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);
    write_ensemble_to(&mut writer, ensemble)?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ensemble::Trigger;
    use crate::potential::HarmonicOscillator;
    use crate::sampling::ReplayNormals;
    use crate::simulation::SimulationParams;

    #[test]
    fn test_line_layout() {
        let params = SimulationParams {
            path_count: 2,
            time_steps: 1,
            ..SimulationParams::default()
        };
        let ensemble = Ensemble::generate(
            &params,
            &HarmonicOscillator::default(),
            &mut ReplayNormals::zeros(),
            4,
            Trigger::Periodic,
        );

        let mut buf = Vec::new();
        write_ensemble_to(&mut buf, &ensemble).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "# generation 4 trigger Periodic paths 2");
        let fields: Vec<f64> = lines[1].split_whitespace().map(|f| f.parse().unwrap()).collect();
        assert_eq!(fields.len(), 8);
        assert_eq!(fields[0], 0.0);
        assert!((fields[1] - 79.8).abs() < 1e-9);
        assert!((fields[4] - 0.5).abs() < 1e-12);
        assert_eq!(&fields[6..], &[-2.0, 2.0]);
    }
}
