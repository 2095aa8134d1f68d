//! Chart XML writer.
//!
//! Emits a `c:chartSpace` document for a [`Chart`] in one forward pass. Excel
//! rejects chart parts whose children are out of schema order, so every
//! element below is written in the exact sequence `CT_ChartSpace` requires.

use crate::common::error::Result;
use crate::common::xml::{Attributes, XmlWriter};
use crate::ooxml::charts::axis::{AxisCommon, AxisIds, CategoryAxis, ValueAxis, bar_chart_axes};
use crate::ooxml::charts::chart::Chart;
use crate::ooxml::charts::legend::Legend;
use crate::ooxml::charts::models::PageMargins;
use crate::ooxml::charts::series::Series;
use crate::ooxml::charts::types::{BarDirection, BarGrouping, ChartType};
use std::io::Write;

const NS_CHART: &str = "http://schemas.openxmlformats.org/drawingml/2006/chart";
const NS_DRAWING: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const NS_RELATIONSHIPS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Assemble `chart` onto `sink` and hand the sink back.
pub(crate) fn assemble<W: Write>(chart: &mut Chart, sink: W) -> Result<W> {
    chart.page_margins.validate()?;

    chart.series_index = 0;
    let axis_ids = chart.axis_ids();

    tracing::debug!(
        chart_id = chart.id,
        series = chart.series.len(),
        category_axis = axis_ids.category,
        value_axis = axis_ids.value,
        "assembling chart"
    );

    let mut writer = XmlWriter::new(sink);

    writer.declaration()?;
    write_chart_space(&mut writer)?;
    writer.empty_tag("c:lang", &Attributes::val("en-US"))?;
    write_chart(&mut writer, chart, axis_ids)?;
    write_print_settings(&mut writer, &chart.page_margins)?;
    writer.end_tag("c:chartSpace")?;

    Ok(writer.into_inner())
}

fn write_chart_space<W: Write>(writer: &mut XmlWriter<W>) -> Result<()> {
    writer.start_tag(
        "c:chartSpace",
        &Attributes::new()
            .push_str("xmlns:c", NS_CHART)
            .push_str("xmlns:a", NS_DRAWING)
            .push_str("xmlns:r", NS_RELATIONSHIPS),
    )
}

fn write_chart<W: Write>(
    writer: &mut XmlWriter<W>,
    chart: &mut Chart,
    axis_ids: AxisIds,
) -> Result<()> {
    writer.start("c:chart")?;

    write_plot_area(writer, chart, axis_ids)?;
    write_legend(writer, &chart.legend)?;
    writer.empty_tag("c:plotVisOnly", &Attributes::val("1"))?;

    writer.end_tag("c:chart")
}

fn write_plot_area<W: Write>(
    writer: &mut XmlWriter<W>,
    chart: &mut Chart,
    axis_ids: AxisIds,
) -> Result<()> {
    writer.start("c:plotArea")?;
    writer.empty("c:layout")?;

    write_bar_chart(writer, chart, axis_ids)?;

    let (category_axis, value_axis) = bar_chart_axes(axis_ids);
    write_category_axis(writer, &category_axis)?;
    write_value_axis(writer, &value_axis)?;

    writer.end_tag("c:plotArea")
}

fn write_bar_chart<W: Write>(
    writer: &mut XmlWriter<W>,
    chart: &mut Chart,
    axis_ids: AxisIds,
) -> Result<()> {
    let element = ChartType::Bar.xml_element_name();
    writer.start(element)?;

    writer.empty_tag("c:barDir", &Attributes::val(BarDirection::Bar.xml_value()))?;
    writer.empty_tag(
        "c:grouping",
        &Attributes::val(BarGrouping::Clustered.xml_value()),
    )?;

    let Chart {
        series,
        series_index,
        ..
    } = chart;
    for ser in series.iter() {
        let index = *series_index;
        *series_index += 1;
        write_series(writer, ser, index)?;
    }

    writer.empty_tag("c:axId", &Attributes::val_int(axis_ids.category))?;
    writer.empty_tag("c:axId", &Attributes::val_int(axis_ids.value))?;

    writer.end_tag(element)
}

fn write_series<W: Write>(writer: &mut XmlWriter<W>, series: &Series, index: u32) -> Result<()> {
    writer.start("c:ser")?;

    writer.empty_tag("c:idx", &Attributes::val_int(index))?;
    writer.empty_tag("c:order", &Attributes::val_int(index))?;

    writer.start("c:val")?;
    writer.start("c:numRef")?;
    writer.data_element("c:f", series.range(), &Attributes::new())?;
    writer.end_tag("c:numRef")?;
    writer.end_tag("c:val")?;

    writer.end_tag("c:ser")
}

fn write_axis_id_and_scaling<W: Write>(
    writer: &mut XmlWriter<W>,
    common: &AxisCommon,
) -> Result<()> {
    writer.empty_tag("c:axId", &Attributes::val_int(common.axis_id))?;

    writer.start("c:scaling")?;
    writer.empty_tag(
        "c:orientation",
        &Attributes::val(common.orientation.xml_value()),
    )?;
    writer.end_tag("c:scaling")?;

    writer.empty_tag("c:axPos", &Attributes::val(common.position.xml_value()))
}

fn write_axis_crossing<W: Write>(writer: &mut XmlWriter<W>, common: &AxisCommon) -> Result<()> {
    writer.empty_tag(
        "c:tickLblPos",
        &Attributes::val(common.tick_label_position.xml_value()),
    )?;
    writer.empty_tag("c:crossAx", &Attributes::val_int(common.cross_axis_id))?;
    writer.empty_tag("c:crosses", &Attributes::val(common.cross_mode.xml_value()))
}

fn write_category_axis<W: Write>(writer: &mut XmlWriter<W>, axis: &CategoryAxis) -> Result<()> {
    let element = axis.axis_type().xml_element_name();
    writer.start(element)?;

    write_axis_id_and_scaling(writer, &axis.common)?;
    write_axis_crossing(writer, &axis.common)?;

    writer.empty_tag("c:auto", &Attributes::val(bool_val(axis.auto)))?;
    writer.empty_tag("c:lblAlgn", &Attributes::val(axis.label_align.xml_value()))?;
    writer.empty_tag("c:lblOffset", &Attributes::val_int(axis.label_offset))?;

    writer.end_tag(element)
}

fn write_value_axis<W: Write>(writer: &mut XmlWriter<W>, axis: &ValueAxis) -> Result<()> {
    let element = axis.axis_type().xml_element_name();
    writer.start(element)?;

    write_axis_id_and_scaling(writer, &axis.common)?;

    if axis.major_gridlines {
        writer.empty("c:majorGridlines")?;
    }

    writer.empty_tag(
        "c:numFmt",
        &Attributes::new()
            .push_str("formatCode", &axis.number_format.format_code)
            .push_str("sourceLinked", bool_val(axis.number_format.source_linked)),
    )?;

    write_axis_crossing(writer, &axis.common)?;

    writer.empty_tag(
        "c:crossBetween",
        &Attributes::val(axis.cross_between.xml_value()),
    )?;

    writer.end_tag(element)
}

fn write_legend<W: Write>(writer: &mut XmlWriter<W>, legend: &Legend) -> Result<()> {
    writer.start("c:legend")?;
    writer.empty_tag("c:legendPos", &Attributes::val(legend.position.xml_value()))?;
    writer.empty("c:layout")?;
    writer.end_tag("c:legend")
}

fn write_print_settings<W: Write>(writer: &mut XmlWriter<W>, margins: &PageMargins) -> Result<()> {
    writer.start("c:printSettings")?;
    writer.empty("c:headerFooter")?;
    writer.empty_tag(
        "c:pageMargins",
        &Attributes::new()
            .push_f64("b", margins.bottom)
            .push_f64("l", margins.left)
            .push_f64("r", margins.right)
            .push_f64("t", margins.top)
            .push_f64("header", margins.header)
            .push_f64("footer", margins.footer),
    )?;
    writer.empty("c:pageSetup")?;
    writer.end_tag("c:printSettings")
}

#[inline]
const fn bool_val(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::charts::series::SeriesOptions;
    use crate::common::error::Error;
    use crate::ooxml::charts::types::LegendPosition;
    use proptest::prelude::*;
    use quick_xml::Reader;
    use quick_xml::events::{BytesStart, Event};

    const EXPECTED_TWO_SERIES: &str = concat!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n",
        "<c:chartSpace xmlns:c=\"http://schemas.openxmlformats.org/drawingml/2006/chart\" ",
        "xmlns:a=\"http://schemas.openxmlformats.org/drawingml/2006/main\" ",
        "xmlns:r=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships\">",
        "<c:lang val=\"en-US\"/>",
        "<c:chart>",
        "<c:plotArea>",
        "<c:layout/>",
        "<c:barChart>",
        "<c:barDir val=\"bar\"/>",
        "<c:grouping val=\"clustered\"/>",
        "<c:ser><c:idx val=\"0\"/><c:order val=\"0\"/>",
        "<c:val><c:numRef><c:f>Sheet1!$A$1:$A$3</c:f></c:numRef></c:val></c:ser>",
        "<c:ser><c:idx val=\"1\"/><c:order val=\"1\"/>",
        "<c:val><c:numRef><c:f>Sheet1!$B$1:$B$3</c:f></c:numRef></c:val></c:ser>",
        "<c:axId val=\"50010002\"/>",
        "<c:axId val=\"50010002\"/>",
        "</c:barChart>",
        "<c:catAx>",
        "<c:axId val=\"50010002\"/>",
        "<c:scaling><c:orientation val=\"minMax\"/></c:scaling>",
        "<c:axPos val=\"l\"/>",
        "<c:tickLblPos val=\"nextTo\"/>",
        "<c:crossAx val=\"50010002\"/>",
        "<c:crosses val=\"autoZero\"/>",
        "<c:auto val=\"1\"/>",
        "<c:lblAlgn val=\"ctr\"/>",
        "<c:lblOffset val=\"100\"/>",
        "</c:catAx>",
        "<c:valAx>",
        "<c:axId val=\"50010002\"/>",
        "<c:scaling><c:orientation val=\"minMax\"/></c:scaling>",
        "<c:axPos val=\"b\"/>",
        "<c:majorGridlines/>",
        "<c:numFmt formatCode=\"General\" sourceLinked=\"1\"/>",
        "<c:tickLblPos val=\"nextTo\"/>",
        "<c:crossAx val=\"50010002\"/>",
        "<c:crosses val=\"autoZero\"/>",
        "<c:crossBetween val=\"between\"/>",
        "</c:valAx>",
        "</c:plotArea>",
        "<c:legend><c:legendPos val=\"r\"/><c:layout/></c:legend>",
        "<c:plotVisOnly val=\"1\"/>",
        "</c:chart>",
        "<c:printSettings>",
        "<c:headerFooter/>",
        "<c:pageMargins b=\"0.75\" l=\"0.7\" r=\"0.7\" t=\"0.75\" header=\"0.3\" footer=\"0.3\"/>",
        "<c:pageSetup/>",
        "</c:printSettings>",
        "</c:chartSpace>",
    );

    fn two_series_chart() -> Chart {
        let mut chart = Chart::new();
        chart.set_id(1);
        chart
            .add_series(&SeriesOptions::new("Sheet1!$A$1:$A$3"))
            .unwrap();
        chart
            .add_series(&SeriesOptions::new("Sheet1!$B$1:$B$3"))
            .unwrap();
        chart
    }

    fn attr(element: &BytesStart<'_>, name: &str) -> Option<String> {
        element
            .try_get_attribute(name)
            .unwrap()
            .map(|a| String::from_utf8(a.value.into_owned()).unwrap())
    }

    /// Element names of the document in start order, with their `val` attribute.
    fn elements(xml: &str) -> Vec<(String, Option<String>)> {
        let mut reader = Reader::from_str(xml);
        let mut out = Vec::new();
        loop {
            match reader.read_event().unwrap() {
                Event::Start(e) | Event::Empty(e) => {
                    let name = String::from_utf8(e.name().as_ref().to_vec()).unwrap();
                    out.push((name, attr(&e, "val")));
                },
                Event::Eof => break,
                _ => {},
            }
        }
        out
    }

    #[test]
    fn test_two_series_document() {
        let mut chart = two_series_chart();
        let xml = chart.to_xml().unwrap();
        assert_eq!(xml, EXPECTED_TWO_SERIES);
    }

    #[test]
    fn test_reassembly_is_identical() {
        let mut chart = two_series_chart();
        let first = chart.to_xml().unwrap();
        let second = chart.to_xml().unwrap();
        assert_eq!(first, second);
        assert_eq!(chart.series_index, 2);
    }

    #[test]
    fn test_empty_chart_document() {
        let mut chart = Chart::new();
        chart.set_id(3);
        let xml = chart.to_xml().unwrap();

        assert!(!xml.contains("<c:ser>"));
        assert!(xml.contains(concat!(
            "<c:grouping val=\"clustered\"/>",
            "<c:axId val=\"50010004\"/><c:axId val=\"50010004\"/>",
            "</c:barChart>",
        )));
    }

    #[test]
    fn test_series_index_and_order() {
        let mut chart = Chart::new();
        for col in ["A", "B", "C", "D"] {
            let range = format!("Sheet1!${col}$1:${col}$5");
            chart.add_series(&SeriesOptions::new(&range)).unwrap();
        }
        let xml = chart.to_xml().unwrap();

        let items = elements(&xml);
        let idx: Vec<_> = items
            .iter()
            .filter(|(name, _)| name == "c:idx")
            .map(|(_, val)| val.clone().unwrap())
            .collect();
        let order: Vec<_> = items
            .iter()
            .filter(|(name, _)| name == "c:order")
            .map(|(_, val)| val.clone().unwrap())
            .collect();

        assert_eq!(idx, ["0", "1", "2", "3"]);
        assert_eq!(order, idx);
    }

    #[test]
    fn test_axes_cross_reference_each_other() {
        let mut chart = two_series_chart();
        chart.set_id(42);
        let xml = chart.to_xml().unwrap();

        let items = elements(&xml);
        let position = |name: &str| items.iter().position(|(n, _)| n == name).unwrap();
        let val_after = |start: usize, name: &str| {
            items[start..]
                .iter()
                .find(|(n, _)| n == name)
                .and_then(|(_, v)| v.clone())
                .unwrap()
        };

        let cat = position("c:catAx");
        let val = position("c:valAx");
        assert!(cat < val);

        let cat_id = val_after(cat, "c:axId");
        let val_id = val_after(val, "c:axId");
        assert_eq!(val_after(cat, "c:crossAx"), val_id);
        assert_eq!(val_after(val, "c:crossAx"), cat_id);
        assert_eq!(cat_id, "50010043");
    }

    #[test]
    fn test_plot_area_child_order() {
        let mut chart = two_series_chart();
        let xml = chart.to_xml().unwrap();

        let names: Vec<String> = elements(&xml).into_iter().map(|(n, _)| n).collect();
        let top_level: Vec<&str> = [
            "c:chartSpace",
            "c:lang",
            "c:chart",
            "c:plotArea",
            "c:barChart",
            "c:catAx",
            "c:valAx",
            "c:legend",
            "c:plotVisOnly",
            "c:printSettings",
            "c:pageMargins",
            "c:pageSetup",
        ]
        .to_vec();

        let positions: Vec<usize> = top_level
            .iter()
            .map(|name| names.iter().position(|n| n == name).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_custom_legend_and_margins() {
        let mut chart = Chart::new()
            .with_legend(Legend::new(LegendPosition::Bottom))
            .with_page_margins(PageMargins::default().with_edges(1.0, 0.5, 0.5, 1.25));
        let xml = chart.to_xml().unwrap();

        assert!(xml.contains("<c:legendPos val=\"b\"/>"));
        assert!(xml.contains(
            "<c:pageMargins b=\"1\" l=\"0.5\" r=\"0.5\" t=\"1.25\" header=\"0.3\" footer=\"0.3\"/>"
        ));
    }

    #[test]
    fn test_range_text_is_escaped() {
        let mut chart = Chart::new();
        chart
            .add_series(&SeriesOptions::new("R&D!$A$1:$A$3"))
            .unwrap();
        let xml = chart.to_xml().unwrap();
        assert!(xml.contains("<c:f>R&amp;D!$A$1:$A$3</c:f>"));
    }

    #[test]
    fn test_quoted_sheet_range_keeps_apostrophes() {
        let mut chart = Chart::new();
        chart
            .add_series(&SeriesOptions::new("'Q1 Data'!$B$2:$B$9"))
            .unwrap();
        let xml = chart.to_xml().unwrap();
        assert!(xml.contains("<c:f>'Q1 Data'!$B$2:$B$9</c:f>"));
    }

    #[test]
    fn test_large_margins_keep_their_value() {
        let margins = PageMargins::default().with_edges(1e20, -0.0, 0.7, 0.75);
        let mut chart = Chart::new().with_page_margins(margins);
        let xml = chart.to_xml().unwrap();
        assert!(xml.contains(concat!(
            "<c:pageMargins b=\"1e20\" l=\"0\" r=\"0.7\" t=\"0.75\" ",
            "header=\"0.3\" footer=\"0.3\"/>",
        )));
    }

    #[test]
    fn test_non_finite_margins_rejected() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let mut chart = two_series_chart()
                .with_page_margins(PageMargins::default().with_edges(0.75, 0.7, bad, 0.75));
            let err = chart.assemble(Vec::new()).unwrap_err();
            assert!(matches!(err, Error::InvalidPageMargins(_)));
        }
    }

    #[test]
    fn test_assemble_into_file() {
        use std::io::{Read, Seek, SeekFrom};

        let mut chart = two_series_chart();
        let mut file = tempfile::tempfile().unwrap();
        chart.assemble(&mut file).unwrap();

        file.seek(SeekFrom::Start(0)).unwrap();
        let mut contents = String::new();
        file.read_to_string(&mut contents).unwrap();
        assert_eq!(contents, EXPECTED_TWO_SERIES);
    }

    #[test]
    fn test_sink_error_is_propagated() {
        struct FailingSink;

        impl Write for FailingSink {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("disk full"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut chart = two_series_chart();
        assert!(chart.assemble(FailingSink).is_err());
    }

    proptest! {
        #[test]
        fn prop_series_numbered_in_insertion_order(count in 0usize..32) {
            let mut chart = Chart::new();
            for row in 1..=count {
                let range = format!("Sheet1!$A${row}:$D${row}");
                chart.add_series(&SeriesOptions::new(&range)).unwrap();
            }
            let xml = chart.to_xml().unwrap();
            let items = elements(&xml);

            let expected: Vec<String> = (0..count).map(|i| i.to_string()).collect();
            let idx: Vec<String> = items
                .iter()
                .filter(|(name, _)| name == "c:idx")
                .filter_map(|(_, val)| val.clone())
                .collect();
            let order: Vec<String> = items
                .iter()
                .filter(|(name, _)| name == "c:order")
                .filter_map(|(_, val)| val.clone())
                .collect();
            prop_assert_eq!(&idx, &expected);
            prop_assert_eq!(&order, &expected);

            let mut reader = Reader::from_str(&xml);
            let mut formulas = Vec::new();
            let mut in_formula = false;
            loop {
                match reader.read_event().unwrap() {
                    Event::Start(e) if e.name().as_ref() == b"c:f" => in_formula = true,
                    Event::End(e) if e.name().as_ref() == b"c:f" => in_formula = false,
                    Event::Text(t) if in_formula => {
                        formulas.push(String::from_utf8(t.into_inner().into_owned()).unwrap());
                    },
                    Event::Eof => break,
                    _ => {},
                }
            }
            let ranges: Vec<String> = chart
                .series()
                .iter()
                .map(|s| s.range().to_string())
                .collect();
            prop_assert_eq!(formulas, ranges);
        }
    }
}
