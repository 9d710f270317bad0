pub trait Stats {
    fn stats<W: std::io::Write>(&self, wtr: W) -> std::io::Result<()>;
}

impl Stats for definitions::Alignment {
    fn stats<W: std::io::Write>(&self, mut wtr: W) -> std::io::Result<()> {
        writeln!(&mut wtr, "Input:{}", self.input_file)?;
        if self.sequences.is_empty() {
            writeln!(&mut wtr, "# of Sequence:0")?;
            return Ok(());
        }
        let lens = self.sequences.iter().map(|s| s.seq().len());
        let sum = lens.clone().sum::<usize>();
        let min = lens.clone().min().unwrap_or(0);
        let max = lens.clone().max().unwrap_or(0);
        let len = self.sequences.len();
        let ave = sum / len;
        writeln!(&mut wtr, "Sequences")?;
        writeln!(&mut wtr, "# of Sequence:{}\nMean Length:{}", len, ave)?;
        writeln!(&mut wtr, "Max Length:{}\nMin Length:{}", max, min)?;
        // OTUs
        let mut counts: std::collections::BTreeMap<&str, usize> = Default::default();
        for seq in self.sequences.iter() {
            *counts.entry(seq.otu.as_str()).or_default() += 1;
        }
        let swapped = self.sequences.iter().filter(|s| s.identifier.contains("_from_"));
        let contaminated = self
            .sequences
            .iter()
            .filter(|s| s.identifier.contains("_contaminated_"));
        writeln!(&mut wtr, "OTUs")?;
        writeln!(&mut wtr, "# of OTU:{}", counts.len())?;
        writeln!(&mut wtr, "Swapped:{}", swapped.count())?;
        writeln!(&mut wtr, "Contaminated:{}", contaminated.count())?;
        for (otu, count) in counts.iter() {
            writeln!(&mut wtr, "OTU\t{otu}\t{count}")?;
        }
        let mut sizes: std::collections::BTreeMap<usize, usize> = Default::default();
        for &count in counts.values() {
            *sizes.entry(count).or_default() += 1;
        }
        for (size, num) in sizes.iter() {
            writeln!(&mut wtr, "SIZE\t{size}\t{num}")?;
        }
        Ok(())
    }
}
