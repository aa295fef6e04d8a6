use crate::layout::PageLayout;
use crate::models::{PositionDescriptor, Positioning};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlacementError {
    #[error("No container element matches selector: {0}")]
    InvalidContainer(String),
    #[error("Unknown positioning mode: {0:?}")]
    InvalidPositioning(String),
    #[error("Percent positioning requires a container size")]
    MissingContainerSize,
    #[error("Container size {width}x{height} cannot be used as a percent reference")]
    InvalidContainerSize { width: f64, height: f64 },
}

/// Compute the page coordinate `(left, top)` of a marker
///
/// Pixel offsets are added to the container's page offset as they are.
/// Percent offsets are taken as a fraction of the reference `container_size`
/// and applied to the container's current rendered size, so a marker keeps
/// its relative place when the container is resized.
pub fn place(
    layout: &(impl PageLayout + ?Sized),
    descriptor: &PositionDescriptor,
) -> Result<(f64, f64), PlacementError> {
    let rect = layout
        .resolve(&descriptor.container)
        .ok_or_else(|| PlacementError::InvalidContainer(descriptor.container.clone()))?;

    let positioning: Positioning = descriptor
        .positioning
        .parse()
        .map_err(PlacementError::InvalidPositioning)?;

    let [dx, dy] = descriptor.offset;
    let coordinate = match positioning {
        Positioning::Pixel => (rect.x + dx, rect.y + dy),
        Positioning::Percent => {
            let size = descriptor
                .container_size
                .ok_or(PlacementError::MissingContainerSize)?;
            if size.width == 0.0 || size.height == 0.0 {
                return Err(PlacementError::InvalidContainerSize {
                    width: size.width,
                    height: size.height,
                });
            }
            let fraction_x = dx / size.width;
            let fraction_y = dy / size.height;
            (
                rect.x + rect.width * fraction_x,
                rect.y + rect.height * fraction_y,
            )
        }
    };

    log::debug!(
        "Placed {} marker over {:?} at ({}, {})",
        positioning,
        descriptor.container,
        coordinate.0,
        coordinate.1
    );
    Ok(coordinate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{ContainerRect, StaticLayout};
    use crate::models::ContainerSize;
    use rstest::rstest;

    fn layout_with(rect: ContainerRect) -> StaticLayout {
        StaticLayout::new().with_container("#target", rect)
    }

    #[rstest]
    #[case(0.0, 0.0, 0.0, 0.0)]
    #[case(15.0, 25.0, 115.0, 225.0)]
    #[case(-5.0, 7.5, 95.0, 207.5)]
    fn test_pixel_adds_literal_offset(
        #[case] dx: f64,
        #[case] dy: f64,
        #[case] left: f64,
        #[case] top: f64,
    ) {
        let layout = layout_with(ContainerRect::new(100.0, 200.0, 640.0, 480.0));
        let descriptor = PositionDescriptor::pixel("#target", dx, dy);

        assert_eq!(place(&layout, &descriptor), Ok((left, top)));
    }

    #[test]
    fn test_percent_rescales_to_rendered_size() {
        // Captured at 200x100, now rendered at 400x300
        let layout = layout_with(ContainerRect::new(10.0, 20.0, 400.0, 300.0));
        let descriptor =
            PositionDescriptor::percent("#target", 50.0, 25.0, ContainerSize::new(200.0, 100.0));

        assert_eq!(place(&layout, &descriptor), Ok((110.0, 95.0)));
    }

    #[test]
    fn test_percent_contribution_doubles_with_width() {
        let descriptor =
            PositionDescriptor::percent("#target", 25.0, 0.0, ContainerSize::new(100.0, 100.0));

        let (narrow, _) = place(
            &layout_with(ContainerRect::new(5.0, 0.0, 200.0, 100.0)),
            &descriptor,
        )
        .unwrap();
        let (wide, _) = place(
            &layout_with(ContainerRect::new(5.0, 0.0, 400.0, 100.0)),
            &descriptor,
        )
        .unwrap();

        assert_eq!(wide - 5.0, 2.0 * (narrow - 5.0));
    }

    #[test]
    fn test_unknown_container() {
        let layout = StaticLayout::new();
        let descriptor = PositionDescriptor::pixel(".nope", 1.0, 1.0);

        assert_eq!(
            place(&layout, &descriptor),
            Err(PlacementError::InvalidContainer(".nope".to_string()))
        );
    }

    #[test]
    fn test_unknown_positioning() {
        let layout = layout_with(ContainerRect::new(0.0, 0.0, 10.0, 10.0));
        let mut descriptor = PositionDescriptor::pixel("#target", 1.0, 1.0);
        descriptor.positioning = "em".to_string();

        assert_eq!(
            place(&layout, &descriptor),
            Err(PlacementError::InvalidPositioning("em".to_string()))
        );
    }

    #[test]
    fn test_percent_without_container_size() {
        let layout = layout_with(ContainerRect::new(0.0, 0.0, 10.0, 10.0));
        let mut descriptor = PositionDescriptor::pixel("#target", 1.0, 1.0);
        descriptor.positioning = "percent".to_string();

        assert_eq!(
            place(&layout, &descriptor),
            Err(PlacementError::MissingContainerSize)
        );
    }

    #[test]
    fn test_percent_with_zero_reference_size() {
        let layout = layout_with(ContainerRect::new(0.0, 0.0, 10.0, 10.0));
        let descriptor =
            PositionDescriptor::percent("#target", 1.0, 1.0, ContainerSize::new(0.0, 50.0));

        assert_eq!(
            place(&layout, &descriptor),
            Err(PlacementError::InvalidContainerSize {
                width: 0.0,
                height: 50.0
            })
        );
    }
}
